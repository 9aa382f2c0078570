//! Match configuration.
//!
//! Every tuning constant the robot uses lives here: motor cartridges, button bindings, the tick,
//! mechanism speeds and thresholds, and the autonomous routine that runs at the start of a match.
//! The values are the ones the robot competes with; the structs exist so tests (and practice
//! builds) can swap them out without touching control code.

use std::time::Duration;

use vexide::smart::motor::Gearset;

use crate::{auton::Routine, peripherals::controller::ControllerButton};

/// Period of one teleop control-loop pass.
pub const TICK_PERIOD: Duration = Duration::from_millis(20);

/// The autonomous routine run when the autonomous period starts.
pub const SELECTED_ROUTINE: Routine = Routine::Blue;

/// Roller motor cartridge.
pub const ROLLER_GEARSET: Gearset = Gearset::Red;

/// Lift motor cartridge.
pub const LIFT_GEARSET: Gearset = Gearset::Green;

/// Tilter motor cartridge.
pub const TILTER_GEARSET: Gearset = Gearset::Red;

/// Drive motor cartridge.
pub const DRIVE_GEARSET: Gearset = Gearset::Green;

/// Which controller button drives which action during driver control.
#[derive(Debug, Clone, Copy)]
pub struct ButtonMap {
    /// Spins the rollers inward.
    pub intake_in:  ControllerButton,
    /// Spins the rollers outward.
    pub intake_out: ControllerButton,
    /// Raises the lift.
    pub lift_up:    ControllerButton,
    /// Lowers the lift.
    pub lift_down:  ControllerButton,
    /// Tilts the tray upright.
    pub tray_up:    ControllerButton,
    /// Tilts the tray back down.
    pub tray_down:  ControllerButton,
    /// Low tower preset.
    pub preset_x:   ControllerButton,
    /// Mid tower preset.
    pub preset_a:   ControllerButton,
    /// Home preset.
    pub preset_b:   ControllerButton,
    /// Tray-down preset.
    pub preset_y:   ControllerButton,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            intake_in:  ControllerButton::ButtonL1,
            intake_out: ControllerButton::ButtonL2,
            lift_up:    ControllerButton::ButtonUp,
            lift_down:  ControllerButton::ButtonDown,
            tray_up:    ControllerButton::ButtonR1,
            tray_down:  ControllerButton::ButtonR2,
            preset_x:   ControllerButton::ButtonX,
            preset_a:   ControllerButton::ButtonA,
            preset_b:   ControllerButton::ButtonB,
            preset_y:   ControllerButton::ButtonY,
        }
    }
}

/// Roller speeds. Once the lift is raised the rollers slow down so cubes are not flung off the
/// top of the arms.
#[derive(Debug, Clone, Copy)]
pub struct RollerConfig {
    /// Lift position (degrees) above which the reduced speeds apply.
    pub lift_threshold: f64,
    /// Intake speed with the lift down.
    pub intake_speed:   i32,
    /// Outtake speed with the lift down.
    pub outtake_speed:  i32,
    /// Intake speed with the lift raised.
    pub raised_intake:  i32,
    /// Outtake speed with the lift raised.
    pub raised_outtake: i32,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            lift_threshold: 300.0,
            intake_speed:   100,
            outtake_speed:  -100,
            raised_intake:  56,
            raised_outtake: -40,
        }
    }
}

/// Manual lift speed.
#[derive(Debug, Clone, Copy)]
pub struct LiftConfig {
    /// Speed commanded while a lift button is held. Down uses the negation.
    pub speed: i32,
}

impl Default for LiftConfig {
    fn default() -> Self { Self { speed: 90 } }
}

/// Manual tilter speeds.
///
/// Tilting up uses `-(max(up_floor, up_base + up_gain * (up_offset + position)))`, which pushes
/// harder the further the tray is from vertical.
#[derive(Debug, Clone, Copy)]
pub struct TilterConfig {
    /// Speed commanded while the tray-down button is held.
    pub down_speed:    i32,
    /// Last-commanded velocity at which tray-down is not re-commanded.
    pub down_sentinel: i32,
    /// Base magnitude of the tray-up speed.
    pub up_base:       f64,
    /// Gain applied to the tilter position.
    pub up_gain:       f64,
    /// Offset added to the tilter position before the gain.
    pub up_offset:     f64,
    /// Smallest tray-up magnitude.
    pub up_floor:      i32,
}

impl Default for TilterConfig {
    fn default() -> Self {
        Self {
            down_speed:    90,
            down_sentinel: 40,
            up_base:       76.0,
            up_gain:       0.08,
            up_offset:     300.0,
            up_floor:      76,
        }
    }
}

/// Everything the teleop control loop needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlConfig {
    /// Button bindings.
    pub buttons: ButtonMap,
    /// Roller speeds.
    pub rollers: RollerConfig,
    /// Lift speed.
    pub lift:    LiftConfig,
    /// Tilter speeds.
    pub tilter:  TilterConfig,
}

/// Autonomous sequencer settings.
#[derive(Debug, Clone, Copy)]
pub struct AutonConfig {
    /// How often position waits re-read the encoder.
    pub poll_interval: Duration,
    /// Gives up on a position wait after this long. `None` waits forever.
    pub wait_timeout:  Option<Duration>,
}

impl Default for AutonConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            wait_timeout:  None,
        }
    }
}
