//! # BigBot
//!
//! Driver control and autonomous routines for a VEX V5 tray-stacking robot, built on
//! [vexide](https://vexide.dev).
//!
//! The robot collects cubes with a pair of intake rollers on a four-bar lift, carries them on a
//! tray and stands the stack up by tilting the tray. This crate wires the Brain's ports to those
//! mechanisms, maps the controller onto them during driver control and plays back a scripted
//! sequence of precomputed paths during autonomous.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bigbot::{fs::logger, hardware::VexRobot};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(log::LevelFilter::Info).unwrap_or_else(|e| println!("Logger Error: {}", e));
//!
//!     let mut robot = VexRobot::from_peripherals(peripherals, MyPathRuntime::new);
//!     robot.initialize();
//!     robot.compete().await;
//! }
//! ```
//!
//! Path generation and following are not part of this crate: `MyPathRuntime` is whatever
//! implements [`auton::MotionRuntime`] for the chassis.
//!
//! ## Modules
//!
//! - [`robot`]: The [`Robot`](robot::Robot) context and its competition callbacks.
//! - [`hardware`]: Port map.
//! - [`opcontrol`]: The driver-control loop.
//! - [`auton`]: Autonomous routines and the step sequencer.
//! - [`mechanism`]: Rollers, lift and tilter.
//! - [`peripherals`]: Hardware traits and their vexide implementations.
//! - [`config`]: Tuning constants.
//! - [`fs`]: Logging to the SD card.

/// Autonomous routines.
///
/// Routines are fixed step lists run by [`auton::run`]. Paths are named by
/// [`PathId`](auton::paths::PathId) and executed by an integrator-supplied
/// [`MotionRuntime`](auton::MotionRuntime).
pub mod auton;

/// Match configuration and tuning constants.
pub mod config;

/// SD card logging.
pub mod fs;

/// Builds the robot from the Brain's peripherals.
pub mod hardware;

/// Rollers, lift and tilter.
pub mod mechanism;

/// Driver control.
///
/// One [`ControlLoop`](opcontrol::ControlLoop) tick samples the controller and runs the roller,
/// lift, tilter, preset and drive controls in that order.
pub mod opcontrol;

/// Hardware traits and their vexide implementations.
pub mod peripherals;

/// The robot context and competition callbacks.
pub mod robot;
