use std::time::Duration;

use super::{Move, Step, paths::PathId};

/// Red alliance routine. Empty until the red side is scripted.
pub const RED: &[Step] = &[];

/// Blue alliance routine: collect the row of cubes, swing into the corner and stack.
pub const BLUE: &[Step] = &[
    Step::Rollers(Move::Velocity(-100)),
    Step::path(PathId::A),
    Step::path_reversed(PathId::B),
    Step::path_reversed(PathId::Wall),
    Step::path(PathId::C),
    Step::path_reversed(PathId::D),
    Step::Rollers(Move::Velocity(0)),
    Step::path(PathId::E),
    Step::Turn {
        degrees: 90.0,
        speed:   14.0,
    },
    Step::path_reversed(PathId::F),
    Step::Rollers(Move::Position {
        target: 110.0,
        speed:  40,
    }),
    Step::path(PathId::G),
    Step::Turn {
        degrees: 135.0,
        speed:   9.0,
    },
    Step::path(PathId::H),
    // Stand the stack up, then give it time to settle before backing away.
    Step::Tilter(Move::Position {
        target: -1000.0,
        speed:  -76,
    }),
    Step::WaitTilterBelow(-950.0),
    Step::Delay(Duration::from_millis(1400)),
    Step::path(PathId::I),
    Step::path(PathId::J),
];

/// Bench test: turn the rollers a little.
pub const TEST: &[Step] = &[Step::Rollers(Move::Position {
    target: 100.0,
    speed:  30,
})];
