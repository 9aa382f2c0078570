//! Driver control.
//!
//! The driver-control phase is a single loop. Every tick a [`ControlLoop`] samples the controller
//! once and runs five sub-controllers in a fixed order:
//!
//! 1. rollers ([`manual::roller_control`])
//! 2. lift ([`manual::lift_control`])
//! 3. tilter ([`manual::tilter_control`])
//! 4. presets ([`presets::PresetController`])
//! 5. drive ([`drive_control`])
//!
//! Later sub-controllers can override commands issued earlier in the same tick, so a preset
//! triggered while the tray buttons are held wins for that tick.
//!
//! # Example
//!
//! ```ignore
//! use bigbot::{config::{ControlConfig, TICK_PERIOD}, opcontrol::ControlLoop};
//!
//! let mut control = ControlLoop::new(ControlConfig::default());
//! loop {
//!     control.tick(&controller, &mut mechanisms, &mut drivetrain);
//!     sleep(TICK_PERIOD).await;
//! }
//! ```

use log::warn;

use crate::{
    config::ControlConfig,
    mechanism::Mechanisms,
    peripherals::{
        actuator::Actuator,
        controller::{ControllerSnapshot, InputSampler, InputSource},
        drivetrain::ArcadeDrive,
    },
};

/// Hold-to-run roller, lift and tilter controls.
pub mod manual;

/// One-press lift and tray presets.
pub mod presets;

use presets::PresetController;

/// Passes the sticks straight through to the chassis.
pub fn drive_control<D: ArcadeDrive>(snapshot: &ControllerSnapshot, drive: &mut D) {
    drive
        .drive_arcade(snapshot.forward, snapshot.turn)
        .unwrap_or_else(|e| warn!("Drivetrain Error: {}", e));
}

/// The driver-control loop body and the state it carries between ticks.
#[derive(Debug, Default)]
pub struct ControlLoop {
    sampler: InputSampler,
    presets: PresetController,
    config:  ControlConfig,
}

impl ControlLoop {
    /// Creates a loop with fresh button history and no pending preset.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            sampler: InputSampler::new(),
            presets: PresetController::new(),
            config,
        }
    }

    /// The preset state, for inspecting a staged lift move.
    pub fn presets(&self) -> &PresetController { &self.presets }

    /// Runs one pass of every sub-controller.
    pub fn tick<A, D, I>(&mut self, input: &I, mech: &mut Mechanisms<A>, drive: &mut D)
    where
        A: Actuator,
        D: ArcadeDrive,
        I: InputSource,
    {
        let snapshot = self.sampler.sample(input);

        manual::roller_control(&snapshot, mech, &self.config);
        manual::lift_control(&snapshot, mech, &self.config);
        manual::tilter_control(&snapshot, mech, &self.config);
        self.presets.tick(&snapshot, &self.config.buttons, mech);
        drive_control(&snapshot, drive);
    }
}
