//! One-press lift and tray positions.
//!
//! A preset fires on the tick its button goes down and issues absolute moves; it never waits for
//! them. The tower presets raise the lift only once the tray is clear of it, so their lift move is
//! staged: it stays pending until the tilter has swung past [`Preset::plan`]'s gate, checked on
//! the trigger tick and every tick after. Triggering any preset replaces a pending lift move, and
//! holding any manual lift or tray button drops it.

use log::{debug, info};

use crate::{
    config::ButtonMap,
    mechanism::Mechanisms,
    peripherals::{
        actuator::Actuator,
        controller::{ControllerButton, ControllerSnapshot},
    },
};

/// Tilter position the tray has to pass before a tower preset raises the lift.
const TRAY_CLEAR: f64 = -240.0;

/// A named arrangement of the lift and tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Tray back, lift to the low tower.
    X,
    /// Tray back, lift to the mid tower.
    A,
    /// Lift and tray home.
    B,
    /// Tray home, lift untouched.
    Y,
}

/// An absolute move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Position in encoder degrees.
    pub position: f64,
    /// Speed, -100 to 100.
    pub speed:    i32,
}

impl Target {
    const fn new(position: f64, speed: i32) -> Self { Self { position, speed } }
}

/// What a preset moves, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetPlan {
    /// Tilter move, issued immediately.
    pub tilter:    Option<Target>,
    /// Lift move.
    pub lift:      Option<Target>,
    /// If set, the lift move waits until the tilter position is below this value.
    pub lift_gate: Option<f64>,
}

impl Preset {
    /// Every preset, in the order their buttons are checked.
    pub const ALL: [Preset; 4] = [Preset::X, Preset::A, Preset::B, Preset::Y];

    /// The moves this preset makes.
    pub const fn plan(self) -> PresetPlan {
        match self {
            Preset::X => PresetPlan {
                tilter:    Some(Target::new(-660.0, -100)),
                lift:      Some(Target::new(730.0, 100)),
                lift_gate: Some(TRAY_CLEAR),
            },
            Preset::A => PresetPlan {
                tilter:    Some(Target::new(-660.0, -100)),
                lift:      Some(Target::new(930.0, 100)),
                lift_gate: Some(TRAY_CLEAR),
            },
            Preset::B => PresetPlan {
                tilter:    Some(Target::new(0.0, 100)),
                lift:      Some(Target::new(5.0, 100)),
                lift_gate: None,
            },
            Preset::Y => PresetPlan {
                tilter:    Some(Target::new(0.0, 80)),
                lift:      None,
                lift_gate: None,
            },
        }
    }

    /// The button bound to this preset.
    pub const fn button(self, buttons: &ButtonMap) -> ControllerButton {
        match self {
            Preset::X => buttons.preset_x,
            Preset::A => buttons.preset_a,
            Preset::B => buttons.preset_b,
            Preset::Y => buttons.preset_y,
        }
    }
}

/// A lift move waiting for the tray to clear.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StagedLift {
    preset: Preset,
    target: Target,
    gate:   f64,
}

/// Triggers presets and releases their staged lift moves.
#[derive(Debug, Default)]
pub struct PresetController {
    staged: Option<StagedLift>,
}

impl PresetController {
    /// Creates a controller with nothing pending.
    pub fn new() -> Self { Self::default() }

    /// The preset whose lift move has not been issued yet.
    pub fn pending(&self) -> Option<Preset> { self.staged.map(|staged| staged.preset) }

    /// Runs one tick: drops a staged lift move if the driver has taken over, triggers every preset
    /// whose button was just pressed, then releases a staged lift move if the tray is clear.
    pub fn tick<A: Actuator>(
        &mut self,
        snapshot: &ControllerSnapshot,
        buttons: &ButtonMap,
        mech: &mut Mechanisms<A>,
    ) {
        let manual = [
            buttons.lift_up,
            buttons.lift_down,
            buttons.tray_up,
            buttons.tray_down,
        ];
        if let Some(staged) = self.staged
            && manual.iter().any(|&b| snapshot.button(b).is_pressed())
        {
            debug!("Manual input, dropping {:?} lift move", staged.preset);
            self.staged = None;
        }

        for preset in Preset::ALL {
            if snapshot.button(preset.button(buttons)).is_now_pressed() {
                self.trigger(preset, mech);
            }
        }

        if let Some(staged) = self.staged {
            let position = mech.tilter.position();
            if position < staged.gate {
                debug!("Tilter at {}, releasing {:?} lift move", position, staged.preset);
                mech.lift.move_to(staged.target.position, staged.target.speed);
                self.staged = None;
            }
        }
    }

    /// Issues `preset`'s immediate moves and stages its gated lift move, if any.
    pub fn trigger<A: Actuator>(&mut self, preset: Preset, mech: &mut Mechanisms<A>) {
        info!("Preset {:?}", preset);
        let plan = preset.plan();

        self.staged = None;
        if let Some(lift) = plan.lift {
            match plan.lift_gate {
                Some(gate) => {
                    self.staged = Some(StagedLift {
                        preset,
                        target: lift,
                        gate,
                    });
                }
                None => mech.lift.move_to(lift.position, lift.speed),
            }
        }
        if let Some(tilter) = plan.tilter {
            mech.tilter.move_to(tilter.position, tilter.speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::{
        controller::{InputSampler, RawInput},
        mock::{Command, clear, mechanisms},
    };

    fn press(sampler: &mut InputSampler, button: ControllerButton) -> ControllerSnapshot {
        sampler.update(RawInput::default().with_pressed(button))
    }

    #[test]
    fn x_waits_for_tray_to_clear() {
        let buttons = ButtonMap::default();
        let mut sampler = InputSampler::new();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        mech.tilter.motor.set_position(-100.0);
        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonX),
            &buttons,
            &mut mech,
        );
        assert_eq!(
            mech.tilter.motor.commands(),
            [Command::Absolute(-660.0, -100)]
        );
        assert!(mech.lift.left.commands().is_empty());
        assert_eq!(presets.pending(), Some(Preset::X));

        mech.tilter.motor.set_position(-240.0);
        presets.tick(&sampler.update(RawInput::default()), &buttons, &mut mech);
        assert!(mech.lift.left.commands().is_empty());

        mech.tilter.motor.set_position(-241.0);
        presets.tick(&sampler.update(RawInput::default()), &buttons, &mut mech);
        assert_eq!(mech.lift.left.commands(), [Command::Absolute(730.0, 200)]);
        assert_eq!(mech.lift.right.commands(), [Command::Absolute(-730.0, 200)]);
        assert_eq!(presets.pending(), None);

        presets.tick(&sampler.update(RawInput::default()), &buttons, &mut mech);
        assert_eq!(mech.lift.left.commands().len(), 1, "staged move fires once");
    }

    #[test]
    fn a_with_tray_already_clear_lifts_immediately() {
        let buttons = ButtonMap::default();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        mech.tilter.motor.set_position(-500.0);
        presets.tick(
            &press(&mut InputSampler::new(), ControllerButton::ButtonA),
            &buttons,
            &mut mech,
        );
        assert_eq!(mech.lift.left.commands(), [Command::Absolute(930.0, 200)]);
        assert_eq!(
            mech.tilter.motor.commands(),
            [Command::Absolute(-660.0, -100)]
        );
    }

    #[test]
    fn b_moves_both_at_once() {
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        presets.trigger(Preset::B, &mut mech);
        assert_eq!(mech.lift.left.commands(), [Command::Absolute(5.0, 200)]);
        assert_eq!(mech.tilter.motor.commands(), [Command::Absolute(0.0, 100)]);
        assert_eq!(presets.pending(), None);
    }

    #[test]
    fn another_preset_replaces_a_staged_lift() {
        let buttons = ButtonMap::default();
        let mut sampler = InputSampler::new();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonX),
            &buttons,
            &mut mech,
        );
        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonY),
            &buttons,
            &mut mech,
        );
        assert_eq!(presets.pending(), None);
        clear(&mut mech);

        mech.tilter.motor.set_position(-700.0);
        presets.tick(&sampler.update(RawInput::default()), &buttons, &mut mech);
        assert!(mech.lift.left.commands().is_empty());
    }

    #[test]
    fn manual_tray_input_drops_a_staged_lift() {
        let buttons = ButtonMap::default();
        let mut sampler = InputSampler::new();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonX),
            &buttons,
            &mut mech,
        );
        assert_eq!(presets.pending(), Some(Preset::X));

        mech.tilter.motor.set_position(-100.0);
        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonR2),
            &buttons,
            &mut mech,
        );
        assert_eq!(presets.pending(), None);

        mech.tilter.motor.set_position(-500.0);
        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonR1),
            &buttons,
            &mut mech,
        );
        presets.tick(&sampler.update(RawInput::default()), &buttons, &mut mech);
        assert!(mech.lift.left.commands().is_empty());
    }

    #[test]
    fn manual_lift_input_drops_a_staged_lift() {
        let buttons = ButtonMap::default();
        let mut sampler = InputSampler::new();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonA),
            &buttons,
            &mut mech,
        );
        mech.tilter.motor.set_position(-700.0);
        presets.tick(
            &press(&mut sampler, ControllerButton::ButtonDown),
            &buttons,
            &mut mech,
        );
        assert_eq!(presets.pending(), None);
        assert!(mech.lift.left.commands().is_empty());
    }

    #[test]
    fn holding_a_preset_button_does_not_retrigger() {
        let buttons = ButtonMap::default();
        let mut sampler = InputSampler::new();
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        for _ in 0..3 {
            presets.tick(
                &press(&mut sampler, ControllerButton::ButtonY),
                &buttons,
                &mut mech,
            );
        }
        assert_eq!(mech.tilter.motor.commands(), [Command::Absolute(0.0, 80)]);
    }

    #[test]
    fn reissuing_repeats_the_same_targets() {
        let mut presets = PresetController::new();
        let mut mech = mechanisms();

        presets.trigger(Preset::Y, &mut mech);
        presets.trigger(Preset::Y, &mut mech);
        assert_eq!(
            mech.tilter.motor.commands(),
            [Command::Absolute(0.0, 80), Command::Absolute(0.0, 80)]
        );
        assert!(mech.lift.left.commands().is_empty());
    }
}
