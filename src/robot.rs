//! The robot and its competition callbacks.
//!
//! [`Robot`] owns every collaborator the control code needs. It is generic over the hardware
//! traits so the whole match flow can run against recording fakes; on the robot the parameters
//! are the vexide types wired up in [`hardware`](crate::hardware).
//!
//! The competition runtime drives the robot through [`Compete`]:
//!
//! | Competition state | Callback                                   |
//! |-------------------|--------------------------------------------|
//! | connected         | [`Robot::competition_initialize`]          |
//! | disabled          | [`Robot::disabled`]                        |
//! | autonomous        | [`Robot::autonomous`]                      |
//! | driver            | [`Robot::opcontrol`]                       |
//!
//! [`Robot::initialize`] runs once, before the runtime takes over.

use log::{debug, info, warn};
use vexide::prelude::Compete;

use crate::{
    auton::{self, MotionRuntime, Routine},
    config::{AutonConfig, ControlConfig, SELECTED_ROUTINE, TICK_PERIOD},
    mechanism::Mechanisms,
    opcontrol::ControlLoop,
    peripherals::{
        Delay,
        actuator::Actuator,
        controller::InputSource,
        display::{StatusDisplay, telemetry_line},
        drivetrain::ArcadeDrive,
    },
};

/// Screen line showing the active phase and, during driver control, tilter telemetry.
pub const PHASE_LINE: usize = 1;

/// Screen line written when the field controller connects.
pub const STATUS_LINE: usize = 2;

/// Everything the robot runs on.
pub struct Robot<A, D, I, M, S, T> {
    /// Rollers, lift and tilter.
    pub mechanisms: Mechanisms<A>,
    /// Chassis, for driver control.
    pub drive:      D,
    /// Controller.
    pub input:      I,
    /// Path runtime, for autonomous.
    pub motion:     M,
    /// Status screen.
    pub screen:     S,
    /// Scheduler sleep.
    pub delay:      T,
    /// Routine run when autonomous starts.
    pub routine:    Routine,
    /// Autonomous sequencer settings.
    pub auton:      AutonConfig,
    control:        ControlLoop,
}

impl<A, D, I, M, S, T> Robot<A, D, I, M, S, T>
where
    A: Actuator,
    D: ArcadeDrive,
    I: InputSource,
    M: MotionRuntime,
    S: StatusDisplay,
    T: Delay,
{
    /// Assembles a robot running [`SELECTED_ROUTINE`] with the match tuning.
    pub fn new(
        mechanisms: Mechanisms<A>,
        drive: D,
        input: I,
        motion: M,
        screen: S,
        delay: T,
    ) -> Self {
        Self {
            mechanisms,
            drive,
            input,
            motion,
            screen,
            delay,
            routine: SELECTED_ROUTINE,
            auton: AutonConfig::default(),
            control: ControlLoop::new(ControlConfig::default()),
        }
    }

    /// Replaces the driver-control tuning. Button history and pending presets are reset.
    #[must_use]
    pub fn with_control_config(mut self, config: ControlConfig) -> Self {
        self.control = ControlLoop::new(config);
        self
    }

    /// Holds the manipulators and zeroes their encoders.
    pub fn initialize(&mut self) {
        info!("Initializing");
        self.mechanisms.initialize();
        self.screen.set_text(PHASE_LINE, "initialize()");
    }

    /// Runs the selected routine to completion.
    pub async fn autonomous(&mut self) {
        info!("Autonomous: {:?}", self.routine);
        self.screen.set_text(PHASE_LINE, "autonomous()");

        auton::run(
            self.routine.steps(),
            &mut self.mechanisms,
            &mut self.motion,
            &mut self.delay,
            &self.auton,
        )
        .await
        .unwrap_or_else(|e| warn!("Autonomous stopped early: {}", e));
    }

    /// Runs driver control until the competition runtime cancels it.
    pub async fn opcontrol(&mut self) {
        info!("Driver control");
        self.screen.set_text(PHASE_LINE, "opcontrol()");
        loop {
            self.teleop_tick();
            self.delay.delay(TICK_PERIOD).await;
        }
    }

    /// One driver-control pass, followed by the telemetry line.
    pub fn teleop_tick(&mut self) {
        self.control
            .tick(&self.input, &mut self.mechanisms, &mut self.drive);

        let line = telemetry_line("tilter vel", self.mechanisms.tilter.target_velocity());
        self.screen.set_text(PHASE_LINE, &line);
    }

    /// Called when the robot is disabled.
    pub fn disabled(&mut self) {
        info!("Disabled");
        self.screen.set_text(PHASE_LINE, "disabled()");
    }

    /// Called when the field controller connects, before the match starts.
    pub fn competition_initialize(&mut self) {
        info!("Connected to field control");
        self.screen
            .set_text(STATUS_LINE, "competition_initialize()");
    }

    /// Screen center-button handler. Nothing is bound to it.
    pub fn on_center_button(&mut self) { debug!("Center button pressed"); }
}

impl<A, D, I, M, S, T> Compete for Robot<A, D, I, M, S, T>
where
    A: Actuator,
    D: ArcadeDrive,
    I: InputSource,
    M: MotionRuntime,
    S: StatusDisplay,
    T: Delay,
{
    async fn connected(&mut self) { self.competition_initialize(); }

    async fn disabled(&mut self) { Robot::disabled(self); }

    async fn autonomous(&mut self) { Robot::autonomous(self).await; }

    async fn driver(&mut self) { self.opcontrol().await; }
}
