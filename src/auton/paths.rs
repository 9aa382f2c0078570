//! Precomputed autonomous paths.
//!
//! Paths are generated and followed by the integrator's [`MotionRuntime`](super::MotionRuntime);
//! this module only names them and records where each one ends. Every path starts at the origin
//! facing +x and ends facing +x, so a lateral offset makes an S-curve.

/// Metres per foot.
const METERS_PER_FOOT: f64 = 0.3048;

/// A named path from the path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PathId {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    Wall,
}

impl PathId {
    /// Every path, in table order.
    pub const ALL: [PathId; 11] = [
        PathId::A,
        PathId::B,
        PathId::C,
        PathId::D,
        PathId::E,
        PathId::F,
        PathId::G,
        PathId::H,
        PathId::I,
        PathId::J,
        PathId::Wall,
    ];

    /// The name the path runtime knows this path by.
    pub const fn name(self) -> &'static str {
        match self {
            PathId::A => "A",
            PathId::B => "B",
            PathId::C => "C",
            PathId::D => "D",
            PathId::E => "E",
            PathId::F => "F",
            PathId::G => "G",
            PathId::H => "H",
            PathId::I => "I",
            PathId::J => "J",
            PathId::Wall => "Wall",
        }
    }

    /// End point `(x, y)` in feet, relative to where the path starts.
    pub const fn endpoint_feet(self) -> (f64, f64) {
        match self {
            PathId::A => (3.0, 0.0),
            PathId::B => (2.8, -2.23),
            PathId::C => (3.8, 0.0),
            PathId::D => (3.8, 2.5),
            PathId::E => (1.78, 0.0),
            PathId::F => (2.5, 0.0),
            PathId::G => (2.0, 0.95),
            PathId::H => (2.0, 0.0),
            PathId::I => (1.0, 0.0),
            PathId::J => (2.0, 0.0),
            PathId::Wall => (0.5, 0.0),
        }
    }

    /// End point `(x, y)` in metres.
    pub fn endpoint_meters(self) -> (f64, f64) {
        let (x, y) = self.endpoint_feet();
        (x * METERS_PER_FOOT, y * METERS_PER_FOOT)
    }
}

impl core::fmt::Display for PathId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { f.write_str(self.name()) }
}

/// Kinematic limits the paths were generated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileLimits {
    /// Maximum velocity in m/s.
    pub max_velocity:     f64,
    /// Maximum acceleration in m/s².
    pub max_acceleration: f64,
    /// Maximum jerk in m/s³.
    pub max_jerk:         f64,
}

/// Limits used for every path in the table.
pub const PROFILE_LIMITS: ProfileLimits = ProfileLimits {
    max_velocity:     0.265,
    max_acceleration: 0.9,
    max_jerk:         5.21,
};

/// Chassis geometry needed to turn paths into wheel motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChassisDimensions {
    /// Wheel diameter in inches.
    pub wheel_diameter: f64,
    /// Distance between the left and right wheels in inches.
    pub track_width:    f64,
    /// Encoder ticks per wheel revolution.
    pub ticks_per_rev:  u32,
}

/// The robot's chassis. Green cartridges are geared 2:1 to the wheels.
pub const CHASSIS: ChassisDimensions = ChassisDimensions {
    wheel_diameter: 6.34,
    track_width:    14.1,
    ticks_per_rev:  900 * 2,
};
