//! Controller input sampling for operator control.
//!
//! The control loop never talks to the controller directly. Once per tick an
//! [`InputSampler`] reads the raw button levels and stick axes from an [`InputSource`] and turns
//! them into a [`ControllerSnapshot`], deriving press and release edges against the previous
//! tick. Only one tick of history is kept.
//!
//! # Example
//!
//! ```ignore
//! use bigbot::peripherals::controller::{ControllerButton, InputSampler};
//!
//! let mut sampler = InputSampler::new();
//! let snapshot = sampler.sample(&controller);
//!
//! if snapshot.button(ControllerButton::ButtonR1).is_now_released() {
//!     // stop the tilter
//! }
//! ```

use log::warn;
use vexide::controller::{Controller, ControllerState};

/// Number of digital buttons on a V5 controller.
pub const BUTTON_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A list of Controller Buttons.
///
/// # Example
///
/// ```ignore
/// let intake = snapshot.button(ControllerButton::ButtonL1);
/// ```
#[allow(missing_docs)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

impl ControllerButton {
    /// Every button, in index order.
    pub const ALL: [ControllerButton; BUTTON_COUNT] = [
        ControllerButton::ButtonA,
        ControllerButton::ButtonB,
        ControllerButton::ButtonX,
        ControllerButton::ButtonY,
        ControllerButton::ButtonUp,
        ControllerButton::ButtonDown,
        ControllerButton::ButtonLeft,
        ControllerButton::ButtonRight,
        ControllerButton::ButtonL1,
        ControllerButton::ButtonL2,
        ControllerButton::ButtonR1,
        ControllerButton::ButtonR2,
    ];

    const fn index(self) -> usize { self as usize }
}

/// Raw controller readings for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    /// Button levels, indexed by [`ControllerButton`].
    pub buttons: [bool; BUTTON_COUNT],
    /// Left stick vertical axis in `[-1, 1]`.
    pub forward: f64,
    /// Right stick horizontal axis in `[-1, 1]`.
    pub turn:    f64,
}

impl RawInput {
    /// Returns a copy with `button` held.
    #[must_use]
    pub const fn with_pressed(mut self, button: ControllerButton) -> Self {
        self.buttons[button.index()] = true;
        self
    }
}

/// Anything that can report the current level of every button and the drive axes.
pub trait InputSource {
    /// Reads the controller right now.
    fn read(&self) -> RawInput;
}

impl InputSource for Controller {
    fn read(&self) -> RawInput {
        let state = self.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        let mut raw = RawInput {
            forward: state.left_stick.y(),
            turn: state.right_stick.x(),
            ..RawInput::default()
        };
        for button in ControllerButton::ALL {
            let level = match button {
                ControllerButton::ButtonA => state.button_a.is_pressed(),
                ControllerButton::ButtonB => state.button_b.is_pressed(),
                ControllerButton::ButtonX => state.button_x.is_pressed(),
                ControllerButton::ButtonY => state.button_y.is_pressed(),
                ControllerButton::ButtonUp => state.button_up.is_pressed(),
                ControllerButton::ButtonDown => state.button_down.is_pressed(),
                ControllerButton::ButtonLeft => state.button_left.is_pressed(),
                ControllerButton::ButtonRight => state.button_right.is_pressed(),
                ControllerButton::ButtonL1 => state.button_l1.is_pressed(),
                ControllerButton::ButtonL2 => state.button_l2.is_pressed(),
                ControllerButton::ButtonR1 => state.button_r1.is_pressed(),
                ControllerButton::ButtonR2 => state.button_r2.is_pressed(),
            };
            raw.buttons[button.index()] = level;
        }
        raw
    }
}

/// Level and edge of one button for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pressed:     bool,
    was_pressed: bool,
}

impl ButtonState {
    /// Returns `true` while the button is held.
    pub const fn is_pressed(&self) -> bool { self.pressed }

    /// Returns `true` while the button is not held.
    pub const fn is_released(&self) -> bool { !self.pressed }

    /// Returns `true` only on the tick the button went down.
    pub const fn is_now_pressed(&self) -> bool { self.pressed && !self.was_pressed }

    /// Returns `true` only on the tick the button came up.
    pub const fn is_now_released(&self) -> bool { !self.pressed && self.was_pressed }
}

/// Everything the control loop reads from the controller in one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerSnapshot {
    buttons:     [ButtonState; BUTTON_COUNT],
    /// Forward/back drive axis in `[-1, 1]`.
    pub forward: f64,
    /// Turn drive axis in `[-1, 1]`.
    pub turn:    f64,
}

impl ControllerSnapshot {
    /// The state of `button` this tick.
    pub const fn button(&self, button: ControllerButton) -> ButtonState {
        self.buttons[button.index()]
    }
}

/// Samples an [`InputSource`] once per tick, remembering the previous levels for edge detection.
#[derive(Debug, Default)]
pub struct InputSampler {
    previous: [bool; BUTTON_COUNT],
}

impl InputSampler {
    /// Creates a sampler that treats every button as released on the previous tick.
    pub fn new() -> Self { Self::default() }

    /// Reads `source` and returns this tick's snapshot.
    pub fn sample<S: InputSource>(&mut self, source: &S) -> ControllerSnapshot {
        self.update(source.read())
    }

    /// Derives edges for `raw` against the previous tick and stores it as the new history.
    pub fn update(&mut self, raw: RawInput) -> ControllerSnapshot {
        let mut snapshot = ControllerSnapshot {
            forward: raw.forward,
            turn: raw.turn,
            ..ControllerSnapshot::default()
        };
        for (i, state) in snapshot.buttons.iter_mut().enumerate() {
            *state = ButtonState {
                pressed:     raw.buttons[i],
                was_pressed: self.previous[i],
            };
        }
        self.previous = raw.buttons;
        snapshot
    }
}
