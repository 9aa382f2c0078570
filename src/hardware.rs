//! Port map.
//!
//! Builds a [`Robot`] out of the Brain's peripherals.
//!
//! | Device        | Port | Cartridge | Reversed |
//! |---------------|------|-----------|----------|
//! | Left roller   | 8    | Red       |          |
//! | Right roller  | 21   | Red       |          |
//! | Left lift     | 16   | Green     |          |
//! | Right lift    | 5    | Green     |          |
//! | Tilter        | 15   | Red       |          |
//! | Left drive    | 18   | Green     |          |
//! | Left drive    | 13   | Green     | yes      |
//! | Left drive    | 17   | Green     | yes      |
//! | Left drive    | 14   | Green     |          |
//! | Right drive   | 2    | Green     | yes      |
//! | Right drive   | 6    | Green     |          |
//! | Right drive   | 4    | Green     |          |
//! | Right drive   | 7    | Green     | yes      |
//!
//! # Example
//!
//! `demos/compbot/main.rs` is a complete binary built this way.
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

use vexide::prelude::{Controller, Direction, Motor, Peripherals};

use crate::{
    auton::MotionRuntime,
    config::{DRIVE_GEARSET, LIFT_GEARSET, ROLLER_GEARSET, TILTER_GEARSET},
    mechanism::{Lift, Mechanisms, Rollers, Tilter},
    peripherals::{VexDelay, display::BrainScreen, drivetrain::Differential},
    robot::Robot,
};

/// The robot as wired on the field.
pub type VexRobot<M> = Robot<Motor, Differential, Controller, M, BrainScreen, VexDelay>;

impl<M: MotionRuntime> VexRobot<M> {
    /// Claims every port the robot uses.
    ///
    /// `motion` builds the path runtime. It receives a handle to the same drive motors that
    /// driver control uses.
    pub fn from_peripherals(
        peripherals: Peripherals,
        motion: impl FnOnce(Differential) -> M,
    ) -> Self {
        let mechanisms = Mechanisms {
            rollers: Rollers {
                left:  Motor::new(peripherals.port_8, ROLLER_GEARSET, Direction::Forward),
                right: Motor::new(peripherals.port_21, ROLLER_GEARSET, Direction::Forward),
            },
            lift:    Lift {
                left:  Motor::new(peripherals.port_16, LIFT_GEARSET, Direction::Forward),
                right: Motor::new(peripherals.port_5, LIFT_GEARSET, Direction::Forward),
            },
            tilter:  Tilter {
                motor: Motor::new(peripherals.port_15, TILTER_GEARSET, Direction::Forward),
            },
        };

        let drive = Differential::new(
            [
                Motor::new(peripherals.port_18, DRIVE_GEARSET, Direction::Forward),
                Motor::new(peripherals.port_13, DRIVE_GEARSET, Direction::Reverse),
                Motor::new(peripherals.port_17, DRIVE_GEARSET, Direction::Reverse),
                Motor::new(peripherals.port_14, DRIVE_GEARSET, Direction::Forward),
            ],
            [
                Motor::new(peripherals.port_2, DRIVE_GEARSET, Direction::Reverse),
                Motor::new(peripherals.port_6, DRIVE_GEARSET, Direction::Forward),
                Motor::new(peripherals.port_4, DRIVE_GEARSET, Direction::Forward),
                Motor::new(peripherals.port_7, DRIVE_GEARSET, Direction::Reverse),
            ],
        );

        Robot::new(
            mechanisms,
            drive.clone(),
            peripherals.primary_controller,
            motion(drive),
            BrainScreen::new(peripherals.display),
            VexDelay,
        )
    }
}
