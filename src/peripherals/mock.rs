//! Recording fakes for the hardware traits.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    future::{Future, ready},
    time::Duration,
};

use vexide::{math::Angle, smart::motor::BrakeMode};

use super::{
    Delay,
    actuator::Actuator,
    controller::{InputSource, RawInput},
    display::StatusDisplay,
    drivetrain::ArcadeDrive,
};
use crate::{
    auton::{MotionRuntime, paths::PathId},
    mechanism::{Lift, Mechanisms, Rollers, Tilter},
};

#[derive(Debug)]
pub struct Unplugged;

impl fmt::Display for Unplugged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("device unplugged") }
}

/// One command received by a [`MockActuator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Velocity(i32),
    Absolute(f64, i32),
    Hold,
    Brake,
    Coast,
    Tare,
}

#[derive(Debug, Default)]
pub struct MockActuator {
    commands:  Vec<Command>,
    readings:  RefCell<VecDeque<f64>>,
    position:  Cell<f64>,
    target:    Cell<Option<i32>>,
    unplugged: Cell<bool>,
}

impl MockActuator {
    pub fn commands(&self) -> Vec<Command> { self.commands.clone() }

    pub fn clear(&mut self) { self.commands.clear(); }

    /// Sets the position every future read returns.
    pub fn set_position(&self, position: f64) {
        self.readings.borrow_mut().clear();
        self.position.set(position);
    }

    /// Queues positions returned by successive reads. The last one sticks.
    pub fn script_positions(&self, positions: impl IntoIterator<Item = f64>) {
        self.readings.borrow_mut().extend(positions);
    }

    /// Overrides the reported target velocity.
    pub fn set_target_velocity(&self, velocity: i32) { self.target.set(Some(velocity)); }

    pub fn disconnect(&self) { self.unplugged.set(true); }
}

impl Actuator for MockActuator {
    type Error = Unplugged;

    fn set_velocity(&mut self, speed: i32) -> Result<(), Self::Error> {
        self.commands.push(Command::Velocity(speed));
        Ok(())
    }

    fn move_absolute(&mut self, position: f64, speed: i32) -> Result<(), Self::Error> {
        self.commands.push(Command::Absolute(position, speed));
        Ok(())
    }

    fn position(&self) -> Result<f64, Self::Error> {
        if self.unplugged.get() {
            return Err(Unplugged);
        }
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.position.set(next);
        }
        Ok(self.position.get())
    }

    fn target_velocity(&self) -> i32 {
        if let Some(target) = self.target.get() {
            return target;
        }
        self.commands
            .iter()
            .rev()
            .find_map(|command| match *command {
                Command::Velocity(v) => Some(v),
                // Profiled moves are stored unsigned on the motor.
                Command::Absolute(_, v) => Some(v.abs()),
                _ => None,
            })
            .unwrap_or(0)
    }

    fn set_brake_mode(&mut self, mode: BrakeMode) -> Result<(), Self::Error> {
        self.commands.push(match mode {
            BrakeMode::Hold => Command::Hold,
            BrakeMode::Brake => Command::Brake,
            BrakeMode::Coast => Command::Coast,
        });
        Ok(())
    }

    fn tare_position(&mut self) -> Result<(), Self::Error> {
        self.commands.push(Command::Tare);
        self.position.set(0.0);
        Ok(())
    }
}

pub fn mechanisms() -> Mechanisms<MockActuator> {
    Mechanisms {
        rollers: Rollers {
            left:  MockActuator::default(),
            right: MockActuator::default(),
        },
        lift:    Lift {
            left:  MockActuator::default(),
            right: MockActuator::default(),
        },
        tilter:  Tilter {
            motor: MockActuator::default(),
        },
    }
}

/// Clears every recorded command.
pub fn clear(mech: &mut Mechanisms<MockActuator>) {
    mech.rollers.left.clear();
    mech.rollers.right.clear();
    mech.lift.left.clear();
    mech.lift.right.clear();
    mech.tilter.motor.clear();
}

#[derive(Debug, Default)]
pub struct MockDrive {
    pub arcade: Vec<(f64, f64)>,
}

impl ArcadeDrive for MockDrive {
    type Error = Unplugged;

    fn drive_arcade(&mut self, forward: f64, turn: f64) -> Result<(), Self::Error> {
        self.arcade.push((forward, turn));
        Ok(())
    }
}

/// Replays queued controller readings, then reports nothing held.
#[derive(Debug, Default)]
pub struct MockInput {
    queued: RefCell<VecDeque<RawInput>>,
}

impl MockInput {
    pub fn push(&self, raw: RawInput) { self.queued.borrow_mut().push_back(raw); }
}

impl InputSource for MockInput {
    fn read(&self) -> RawInput { self.queued.borrow_mut().pop_front().unwrap_or_default() }
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    pub writes: Vec<(usize, String)>,
}

impl MockDisplay {
    /// The latest text written to `line`.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(l, _)| *l == line)
            .map(|(_, text)| text.as_str())
    }
}

impl StatusDisplay for MockDisplay {
    fn set_text(&mut self, line: usize, text: &str) { self.writes.push((line, text.to_owned())); }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    pub waits: Vec<Duration>,
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) -> impl Future<Output = ()> {
        self.waits.push(duration);
        ready(())
    }
}

/// One call received by a [`MockMotion`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Path {
        path:     PathId,
        reversed: bool,
        mirrored: bool,
    },
    Turn(f64),
    MaxVelocity(f64),
}

#[derive(Debug)]
pub struct MockMotion {
    pub calls:        Vec<Motion>,
    pub max_velocity: f64,
}

impl Default for MockMotion {
    fn default() -> Self {
        Self {
            calls:        Vec::new(),
            max_velocity: 200.0,
        }
    }
}

impl MockMotion {
    pub fn paths(&self) -> Vec<PathId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Motion::Path { path, .. } => Some(*path),
                _ => None,
            })
            .collect()
    }
}

impl MotionRuntime for MockMotion {
    fn run_path(
        &mut self,
        path: PathId,
        reversed: bool,
        mirrored: bool,
    ) -> impl Future<Output = ()> {
        self.calls.push(Motion::Path {
            path,
            reversed,
            mirrored,
        });
        ready(())
    }

    fn turn(&mut self, angle: Angle) -> impl Future<Output = ()> {
        self.calls.push(Motion::Turn(angle.as_degrees()));
        ready(())
    }

    fn max_velocity(&self) -> f64 { self.max_velocity }

    fn set_max_velocity(&mut self, velocity: f64) {
        self.max_velocity = velocity;
        self.calls.push(Motion::MaxVelocity(velocity));
    }
}
