//! Differential drivetrain.
//!
//! The chassis has four motors per side. During driver control the only thing asked of it is
//! arcade mixing; autonomous motion goes through the integrator's
//! [`MotionRuntime`](crate::auton::MotionRuntime), which usually wants the same motors. The motor
//! groups are therefore kept in reference-counted cells so the drivetrain can be cloned and
//! shared.
//!
//! # Example
//!
//! ```ignore
//! use bigbot::peripherals::drivetrain::{ArcadeDrive, Differential};
//! use vexide::prelude::*;
//!
//! let mut drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     ],
//! );
//!
//! drivetrain.drive_arcade(0.5, 0.1)?;
//! ```

use std::{cell::RefCell, rc::Rc};

use snafu::{ResultExt, Snafu};
use vexide::smart::{PortError, motor::Motor};

/// Voltage applied at full stick deflection.
const MAX_VOLTAGE: f64 = 12.0;

/// A drivetrain that supports "arcade drive" (forward/turn) inverse kinematics.
pub trait ArcadeDrive {
    /// Error type returned when the drivetrain cannot be commanded.
    type Error: core::fmt::Display;

    /// Drives using a forward and a turn input, both in `[-1, 1]`.
    fn drive_arcade(&mut self, forward: f64, turn: f64) -> Result<(), Self::Error>;
}

/// Why a drive command did not reach every motor.
#[derive(Debug, Snafu)]
pub enum DriveError {
    /// A motor rejected the command.
    #[snafu(display("drive motor error: {source}"))]
    Port {
        /// The motor's error.
        source: PortError,
    },
    /// The motor group was borrowed elsewhere, so the whole side was skipped.
    #[snafu(display("{side} drive motors are in use elsewhere"))]
    Busy {
        /// `"left"` or `"right"`.
        side: &'static str,
    },
}

/// Left and right fractions of full power for an arcade command, scaled down together so that
/// neither side exceeds full power.
pub fn arcade_mix(forward: f64, turn: f64) -> [f64; 2] {
    desaturate([forward + turn, forward - turn], 1.0)
}

/// Scales `values` down uniformly so that none exceeds `max` in magnitude.
pub fn desaturate<const N: usize>(values: [f64; N], max: f64) -> [f64; N] {
    let largest_magnitude = values.iter().map(|v| v.abs()).fold(0.0, f64::max);

    if largest_magnitude > max {
        values.map(|v| v * max / largest_magnitude)
    } else {
        values
    }
}

/// A differential drivetrain built from a left and a right motor group.
///
/// Motors on the same side must already be configured with directions that make positive
/// voltage drive the robot forward.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    pub left:  Rc<RefCell<dyn AsMut<[Motor]>>>,
    /// The right motor group.
    pub right: Rc<RefCell<dyn AsMut<[Motor]>>>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  Rc::new(RefCell::new(left)),
            right: Rc::new(RefCell::new(right)),
        }
    }

    /// Applies `f` to every motor, returning the last error seen. Every motor is attempted even
    /// if an earlier one fails.
    fn for_each_side(
        &self,
        mut f: impl FnMut(&mut Motor, bool) -> Result<(), PortError>,
    ) -> Result<(), DriveError> {
        let mut outcome = Ok(());
        for (group, is_left, side) in [(&self.left, true, "left"), (&self.right, false, "right")] {
            let Ok(mut motors) = group.try_borrow_mut() else {
                outcome = BusySnafu { side }.fail();
                continue;
            };
            for motor in motors.as_mut() {
                if let Err(e) = f(motor, is_left).context(PortSnafu) {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }
}

impl ArcadeDrive for Differential {
    type Error = DriveError;

    fn drive_arcade(&mut self, forward: f64, turn: f64) -> Result<(), Self::Error> {
        let [left, right] = arcade_mix(forward, turn);

        self.for_each_side(|motor, is_left| {
            let power = if is_left { left } else { right };
            motor.set_voltage(power * MAX_VOLTAGE)
        })
    }
}
