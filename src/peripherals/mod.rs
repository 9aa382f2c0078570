//! Hardware seams.
//!
//! Every piece of hardware the control code touches sits behind a small trait, with a vexide
//! implementation next to it:
//!
//! - [`Actuator`](actuator::Actuator): a single smart motor.
//! - [`InputSource`](controller::InputSource): the handheld controller.
//! - [`ArcadeDrive`](drivetrain::ArcadeDrive): the chassis.
//! - [`StatusDisplay`](display::StatusDisplay): the Brain screen.
//! - [`Delay`]: the scheduler's sleep.

use std::{future::Future, time::Duration};

/// Motor interface and the vexide [`Motor`](vexide::smart::motor::Motor) implementation.
pub mod actuator;

/// Controller sampling and button edge detection.
pub mod controller;

/// Brain screen status lines.
pub mod display;

/// Differential drivetrain with arcade mixing.
pub mod drivetrain;

#[cfg(test)]
pub(crate) mod mock;

/// Suspends the calling task for a while.
pub trait Delay {
    /// Resolves after `duration` has passed.
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()>;
}

/// [`Delay`] backed by the vexide executor's timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct VexDelay;

impl Delay for VexDelay {
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()> {
        vexide::time::sleep(duration)
    }
}
