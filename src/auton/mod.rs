//! Autonomous routines.
//!
//! A routine is a fixed list of [`Step`]s executed strictly in order. There is no branching and
//! no retry: every step runs, and steps that wait (paths, turns, position waits, delays) hold up
//! everything after them until they finish.
//!
//! Path following and turning are delegated to a [`MotionRuntime`], which the integrator
//! supplies. The sequencer only decides what to run and when.
//!
//! # Example
//!
//! ```ignore
//! use bigbot::{auton::{self, Routine}, config::AutonConfig};
//!
//! auton::run(
//!     Routine::Test.steps(),
//!     &mut mechanisms,
//!     &mut motion,
//!     &mut VexDelay,
//!     &AutonConfig::default(),
//! )
//! .await?;
//! ```

use std::{future::Future, time::Duration};

use log::{debug, info};
use snafu::Snafu;
use vexide::math::Angle;

use crate::{
    config::AutonConfig,
    mechanism::Mechanisms,
    peripherals::{Delay, actuator::Actuator},
};

/// Named paths and chassis parameters.
pub mod paths;

/// The step lists for each routine.
pub mod routines;

use paths::PathId;

/// Drives the chassis along precomputed paths.
pub trait MotionRuntime {
    /// Follows `path`, resolving once the chassis has settled at the end.
    fn run_path(&mut self, path: PathId, reversed: bool, mirrored: bool)
    -> impl Future<Output = ()>;

    /// Turns in place by `angle`, resolving once settled.
    fn turn(&mut self, angle: Angle) -> impl Future<Output = ()>;

    /// Current chassis velocity limit in RPM.
    fn max_velocity(&self) -> f64;

    /// Sets the chassis velocity limit in RPM.
    fn set_max_velocity(&mut self, velocity: f64);
}

/// A command for one manipulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Move {
    /// Spin at a speed.
    Velocity(i32),
    /// Go to an absolute position at a speed.
    Position {
        /// Target in encoder degrees.
        target: f64,
        /// Speed, -100 to 100.
        speed:  i32,
    },
}

/// One step of a routine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Follow a path and wait for it to settle.
    RunPath {
        /// Which path.
        path:     PathId,
        /// Drive the path backwards.
        reversed: bool,
        /// Mirror the path left/right.
        mirrored: bool,
    },
    /// Turn in place.
    Turn {
        /// Clockwise angle in degrees.
        degrees: f64,
        /// Velocity limit during the turn, -100 to 100.
        speed:   f64,
    },
    /// Command the rollers. Position moves are relative to where the rollers are now.
    Rollers(Move),
    /// Command the lift.
    Lift(Move),
    /// Command the tilter.
    Tilter(Move),
    /// Wait until the tilter position is at or below a threshold.
    WaitTilterBelow(f64),
    /// Do nothing for a while.
    Delay(Duration),
}

impl Step {
    /// Follow `path` forwards.
    pub const fn path(path: PathId) -> Self {
        Step::RunPath {
            path,
            reversed: false,
            mirrored: false,
        }
    }

    /// Follow `path` backwards.
    pub const fn path_reversed(path: PathId) -> Self {
        Step::RunPath {
            path,
            reversed: true,
            mirrored: false,
        }
    }
}

/// Selects one of the scripted routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// Red alliance. Nothing is scripted yet.
    Red,
    /// Blue alliance: the full match routine.
    Blue,
    /// Bench test: nudge the rollers.
    Test,
}

impl Routine {
    /// The steps this routine runs.
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Routine::Red => routines::RED,
            Routine::Blue => routines::BLUE,
            Routine::Test => routines::TEST,
        }
    }
}

/// Why a routine stopped early.
#[derive(Debug, Snafu)]
pub enum SequenceError {
    /// A position wait ran out of time.
    #[snafu(display(
        "tilter stuck at {position} waiting for {threshold} (gave up after {waited:?})"
    ))]
    WaitTimedOut {
        /// The position being waited for.
        threshold: f64,
        /// The last position read.
        position:  f64,
        /// How long the wait lasted.
        waited:    Duration,
    },
}

/// Runs `steps` in order.
///
/// # Errors
///
/// Returns [`SequenceError::WaitTimedOut`] if a position wait exceeds
/// [`AutonConfig::wait_timeout`]. Remaining steps are skipped. With no timeout configured this
/// never returns an error, and a stalled tilter waits forever.
pub async fn run<A, M, D>(
    steps: &[Step],
    mech: &mut Mechanisms<A>,
    motion: &mut M,
    delay: &mut D,
    config: &AutonConfig,
) -> Result<(), SequenceError>
where
    A: Actuator,
    M: MotionRuntime,
    D: Delay,
{
    for (i, step) in steps.iter().enumerate() {
        debug!("Step {}: {:?}", i, step);
        match *step {
            Step::RunPath {
                path,
                reversed,
                mirrored,
            } => motion.run_path(path, reversed, mirrored).await,
            Step::Turn { degrees, speed } => turn(motion, degrees, speed).await,
            Step::Rollers(Move::Velocity(speed)) => mech.rollers.spin(speed),
            Step::Rollers(Move::Position { target, speed }) => mech.rollers.move_to(target, speed),
            Step::Lift(Move::Velocity(speed)) => mech.lift.spin(speed),
            Step::Lift(Move::Position { target, speed }) => mech.lift.move_to(target, speed),
            Step::Tilter(Move::Velocity(speed)) => mech.tilter.spin(speed),
            Step::Tilter(Move::Position { target, speed }) => mech.tilter.move_to(target, speed),
            Step::WaitTilterBelow(threshold) => {
                wait_tilter_below(mech, delay, threshold, config).await?;
            }
            Step::Delay(duration) => delay.delay(duration).await,
        }
    }
    info!("Routine finished ({} steps)", steps.len());
    Ok(())
}

/// Turns with a temporary velocity limit.
///
/// The runtime's angle convention is doubled, so the requested angle is halved. The velocity
/// limit in effect before the turn is restored afterwards.
async fn turn<M: MotionRuntime>(motion: &mut M, degrees: f64, speed: f64) {
    let previous = motion.max_velocity();
    motion.set_max_velocity(speed * 2.0);
    motion.turn(Angle::from_degrees(degrees / 2.0)).await;
    motion.set_max_velocity(previous);
}

async fn wait_tilter_below<A: Actuator, D: Delay>(
    mech: &Mechanisms<A>,
    delay: &mut D,
    threshold: f64,
    config: &AutonConfig,
) -> Result<(), SequenceError> {
    let mut waited = Duration::ZERO;
    loop {
        let position = mech.tilter.position();
        if position <= threshold {
            debug!("Tilter reached {} after {:?}", position, waited);
            return Ok(());
        }
        if let Some(timeout) = config.wait_timeout
            && waited >= timeout
        {
            return WaitTimedOutSnafu {
                threshold,
                position,
                waited,
            }
            .fail();
        }
        delay.delay(config.poll_interval).await;
        waited += config.poll_interval;
    }
}
