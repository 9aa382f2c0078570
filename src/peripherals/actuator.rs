//! Single-motor actuator interface.
//!
//! Every mechanism on the robot is built out of [`Actuator`]s. On the robot these are plain
//! vexide [`Motor`]s; in tests they are recording fakes. Positions are in encoder degrees and
//! speeds in RPM, matching the motor's internal units.

use log::warn;
use vexide::{
    math::Angle,
    smart::{
        PortError,
        motor::{BrakeMode, Motor, MotorControl},
    },
};

/// A motor that accepts velocity and absolute-position commands.
///
/// Commands are fire-and-forget: the motor runs its own closed-loop control, so nothing here
/// waits for a target to be reached.
pub trait Actuator {
    /// Error returned when the device cannot be reached.
    type Error: core::fmt::Display;

    /// Spins at `speed` RPM. Zero stops the motor using its brake mode.
    fn set_velocity(&mut self, speed: i32) -> Result<(), Self::Error>;

    /// Moves to `position` degrees at up to `speed` RPM.
    fn move_absolute(&mut self, position: f64, speed: i32) -> Result<(), Self::Error>;

    /// Current encoder position in degrees.
    fn position(&self) -> Result<f64, Self::Error>;

    /// The velocity most recently commanded, whether directly or as a profiled move. Profiled
    /// moves report their speed without a sign.
    fn target_velocity(&self) -> i32;

    /// Sets how the motor behaves at zero commanded velocity.
    fn set_brake_mode(&mut self, mode: BrakeMode) -> Result<(), Self::Error>;

    /// Makes the current position read as zero.
    fn tare_position(&mut self) -> Result<(), Self::Error>;
}

impl Actuator for Motor {
    type Error = PortError;

    fn set_velocity(&mut self, speed: i32) -> Result<(), Self::Error> {
        Motor::set_velocity(self, speed)
    }

    fn move_absolute(&mut self, position: f64, speed: i32) -> Result<(), Self::Error> {
        // Profiled moves take an unsigned speed; direction comes from the target.
        self.set_position_target(Angle::from_degrees(position), speed.abs())
    }

    fn position(&self) -> Result<f64, Self::Error> {
        Motor::position(self).map(|angle| angle.as_degrees())
    }

    fn target_velocity(&self) -> i32 {
        match self.target() {
            MotorControl::Velocity(rpm) => rpm,
            MotorControl::Position(_, rpm) => rpm,
            _ => 0,
        }
    }

    fn set_brake_mode(&mut self, mode: BrakeMode) -> Result<(), Self::Error> { self.brake(mode) }

    fn tare_position(&mut self) -> Result<(), Self::Error> { self.reset_position() }
}

/// Reads a position, logging and falling back to zero if the device is unreachable.
pub(crate) fn position_or_zero<A: Actuator>(actuator: &A, name: &str) -> f64 {
    actuator.position().unwrap_or_else(|e| {
        warn!("{} Position Error: {}", name, e);
        0.0
    })
}

/// Logs a failed command without interrupting the caller.
pub(crate) fn report<E: core::fmt::Display>(result: Result<(), E>, name: &str) {
    if let Err(e) = result {
        warn!("{} Command Error: {}", name, e);
    }
}
