//! Hold-to-run mechanism controls.
//!
//! Each function reads the buttons bound to one mechanism and commands it for this tick. The
//! rollers are commanded every tick. The lift and tilter are only commanded while a button is
//! held and once more on the tick it comes up, so a preset's position move keeps running when the
//! driver lets go of the sticks.

use crate::{
    config::ControlConfig,
    mechanism::Mechanisms,
    peripherals::{actuator::Actuator, controller::ControllerSnapshot},
};

/// Intake or outtake while a roller button is held. Intake wins if both are held.
///
/// Speeds drop once the lift is above [`RollerConfig::lift_threshold`](crate::config::RollerConfig).
pub fn roller_control<A: Actuator>(
    snapshot: &ControllerSnapshot,
    mech: &mut Mechanisms<A>,
    config: &ControlConfig,
) {
    let rollers = &config.rollers;
    let (intake, outtake) = if mech.lift.position() > rollers.lift_threshold {
        (rollers.raised_intake, rollers.raised_outtake)
    } else {
        (rollers.intake_speed, rollers.outtake_speed)
    };

    let speed = if snapshot.button(config.buttons.intake_in).is_pressed() {
        intake
    } else if snapshot.button(config.buttons.intake_out).is_pressed() {
        outtake
    } else {
        0
    };
    mech.rollers.spin(speed);
}

/// Raise or lower the lift while held. Up wins if both are held.
pub fn lift_control<A: Actuator>(
    snapshot: &ControllerSnapshot,
    mech: &mut Mechanisms<A>,
    config: &ControlConfig,
) {
    let up = snapshot.button(config.buttons.lift_up);
    let down = snapshot.button(config.buttons.lift_down);

    if up.is_pressed() {
        mech.lift.spin(config.lift.speed);
    } else if down.is_pressed() {
        mech.lift.spin(-config.lift.speed);
    }

    if up.is_now_released() || down.is_now_released() {
        mech.lift.spin(0);
    }
}

/// Tilt the tray while held. Tray-down is checked first.
///
/// Tray-down is skipped while the tilter's last commanded velocity equals
/// [`TilterConfig::down_sentinel`](crate::config::TilterConfig), which lets tray-up through.
pub fn tilter_control<A: Actuator>(
    snapshot: &ControllerSnapshot,
    mech: &mut Mechanisms<A>,
    config: &ControlConfig,
) {
    let up = snapshot.button(config.buttons.tray_up);
    let down = snapshot.button(config.buttons.tray_down);
    let tilter = &config.tilter;

    if down.is_pressed() && mech.tilter.target_velocity() != tilter.down_sentinel {
        mech.tilter.spin(tilter.down_speed);
    } else if up.is_pressed() {
        mech.tilter.spin(tilter_up_speed(mech.tilter.position(), config));
    }

    if up.is_now_released() || down.is_now_released() {
        mech.tilter.spin(0);
    }
}

/// Tray-up velocity at `position`. Faster while the tray is still low, never slower than the
/// floor.
pub fn tilter_up_speed(position: f64, config: &ControlConfig) -> i32 {
    let tilter = &config.tilter;
    let magnitude = (tilter.up_base + tilter.up_gain * (tilter.up_offset + position)) as i32;
    -magnitude.max(tilter.up_floor)
}
