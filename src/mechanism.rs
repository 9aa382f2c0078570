//! The robot's manipulators.
//!
//! Each mechanism turns one logical command into per-motor commands. Paired motors face each
//! other, so the two sides always receive mirrored signs: a single speed or position produces
//! symmetric motion.

use log::debug;
use vexide::smart::motor::BrakeMode;

use crate::peripherals::actuator::{Actuator, position_or_zero, report};

/// Lift motors are geared so that logical speeds are doubled at the motor.
const LIFT_SPEED_SCALE: i32 = 2;

/// Intake rollers on either side of the tray.
pub struct Rollers<A> {
    /// Left roller. Spins with the negated speed.
    pub left:  A,
    /// Right roller.
    pub right: A,
}

impl<A: Actuator> Rollers<A> {
    /// Spins both rollers. Positive speeds intake. Range is -100 to 100.
    pub fn spin(&mut self, speed: i32) {
        report(self.left.set_velocity(-speed), "Left Roller");
        report(self.right.set_velocity(speed), "Right Roller");
    }

    /// Turns both rollers `position` degrees from where they are now.
    ///
    /// The encoders are tared first, so the move is relative to the current position.
    pub fn move_to(&mut self, position: f64, speed: i32) {
        debug!("Rollers to {} @ {}", position, speed);
        report(self.left.tare_position(), "Left Roller");
        report(self.right.tare_position(), "Right Roller");
        report(self.left.move_absolute(-position, speed), "Left Roller");
        report(self.right.move_absolute(position, speed), "Right Roller");
    }

    /// Sets the brake mode of both rollers.
    pub fn set_brake_mode(&mut self, mode: BrakeMode) {
        report(self.left.set_brake_mode(mode), "Left Roller");
        report(self.right.set_brake_mode(mode), "Right Roller");
    }
}

/// The four-bar lift carrying the rollers.
pub struct Lift<A> {
    /// Left lift motor. Its encoder is the lift's position.
    pub left:  A,
    /// Right lift motor. Receives negated commands.
    pub right: A,
}

impl<A: Actuator> Lift<A> {
    /// Moves the lift. Positive speeds raise it. Range is -100 to 100.
    pub fn spin(&mut self, speed: i32) {
        let speed = speed * LIFT_SPEED_SCALE;
        report(self.left.set_velocity(speed), "Left Lift");
        report(self.right.set_velocity(-speed), "Right Lift");
    }

    /// Moves the lift to an absolute `position`.
    pub fn move_to(&mut self, position: f64, speed: i32) {
        debug!("Lift to {} @ {}", position, speed);
        let speed = speed * LIFT_SPEED_SCALE;
        report(self.left.move_absolute(position, speed), "Left Lift");
        report(self.right.move_absolute(-position, speed), "Right Lift");
    }

    /// Lift height in encoder degrees, read from the left motor.
    pub fn position(&self) -> f64 { position_or_zero(&self.left, "Left Lift") }

    /// Sets the brake mode of both lift motors.
    pub fn set_brake_mode(&mut self, mode: BrakeMode) {
        report(self.left.set_brake_mode(mode), "Left Lift");
        report(self.right.set_brake_mode(mode), "Right Lift");
    }

    /// Zeroes both lift encoders.
    pub fn tare_position(&mut self) {
        report(self.left.tare_position(), "Left Lift");
        report(self.right.tare_position(), "Right Lift");
    }
}

/// The tray tilter. Negative positions tilt the tray toward vertical.
pub struct Tilter<A> {
    /// The tilter motor.
    pub motor: A,
}

impl<A: Actuator> Tilter<A> {
    /// Spins the tilter. A speed of zero holds it in place.
    pub fn spin(&mut self, speed: i32) { report(self.motor.set_velocity(speed), "Tilter"); }

    /// Moves the tilter to an absolute `position`.
    pub fn move_to(&mut self, position: f64, speed: i32) {
        debug!("Tilter to {} @ {}", position, speed);
        report(self.motor.move_absolute(position, speed), "Tilter");
    }

    /// Tilter angle in encoder degrees.
    pub fn position(&self) -> f64 { position_or_zero(&self.motor, "Tilter") }

    /// The velocity most recently commanded to the tilter.
    pub fn target_velocity(&self) -> i32 { self.motor.target_velocity() }

    /// Sets the tilter's brake mode.
    pub fn set_brake_mode(&mut self, mode: BrakeMode) {
        report(self.motor.set_brake_mode(mode), "Tilter");
    }

    /// Zeroes the tilter encoder.
    pub fn tare_position(&mut self) { report(self.motor.tare_position(), "Tilter"); }
}

/// Every manipulator on the robot.
pub struct Mechanisms<A> {
    /// Intake rollers.
    pub rollers: Rollers<A>,
    /// Roller lift.
    pub lift:    Lift<A>,
    /// Tray tilter.
    pub tilter:  Tilter<A>,
}

impl<A: Actuator> Mechanisms<A> {
    /// Puts every manipulator in hold mode and zeroes the lift and tilter encoders, so the
    /// starting configuration reads as position zero.
    pub fn initialize(&mut self) {
        self.lift.set_brake_mode(BrakeMode::Hold);
        self.tilter.set_brake_mode(BrakeMode::Hold);
        self.rollers.set_brake_mode(BrakeMode::Hold);

        self.lift.tare_position();
        self.tilter.tare_position();
    }
}
