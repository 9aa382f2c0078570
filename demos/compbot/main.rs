//! Competition entry point with a stand-in path runtime.
//!
//! The chassis is not driven in autonomous. Each path and turn is logged and given a fixed
//! settle time, which is enough to rehearse the manipulator half of a routine on the field.

use core::time::Duration;

use bigbot::{
    auton::{MotionRuntime, paths::PathId},
    fs::logger,
    hardware::VexRobot,
    peripherals::drivetrain::Differential,
};
use log::{LevelFilter, info};
use vexide::{math::Angle, prelude::*};

/// Time each stand-in path or turn takes.
const SETTLE: Duration = Duration::from_millis(500);

struct DryRun {
    max_velocity: f64,
}

impl DryRun {
    fn new(_drive: Differential) -> Self { Self { max_velocity: 200.0 } }
}

impl MotionRuntime for DryRun {
    async fn run_path(&mut self, path: PathId, reversed: bool, mirrored: bool) {
        info!(
            "Path {} (reversed: {}, mirrored: {}) at {} rpm",
            path.name(),
            reversed,
            mirrored,
            self.max_velocity
        );
        sleep(SETTLE).await;
    }

    async fn turn(&mut self, angle: Angle) {
        info!("Turn {:.1} at {} rpm", angle.as_degrees(), self.max_velocity);
        sleep(SETTLE).await;
    }

    fn max_velocity(&self) -> f64 { self.max_velocity }

    fn set_max_velocity(&mut self, velocity: f64) { self.max_velocity = velocity; }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Info).unwrap_or_else(|e| println!("Logger Error: {}", e));

    let mut robot = VexRobot::from_peripherals(peripherals, DryRun::new);
    robot.initialize();
    robot.compete().await;
}
