//! Circle Arena - rigid circles bouncing inside a square arena
//!
//! Core modules:
//! - `sim`: Simulation core (circles, walls, pairwise collisions, stepping)
//! - `config`: Serializable simulation configuration
//! - `instance`: GPU-ready per-circle snapshot for an external renderer

pub mod config;
pub mod instance;
pub mod sim;

pub use config::{ImpulseModel, SimConfig, StepOrder};
pub use instance::CircleInstance;
pub use sim::{Circle, OverlapHistory, Population, Simulation, StepReport};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Arena spans [ARENA_MIN, ARENA_MAX] on both axes
    pub const ARENA_MIN: f32 = -1.0;
    pub const ARENA_MAX: f32 = 1.0;

    /// Circle count range (the caller clamps into this)
    pub const MIN_CIRCLES: u32 = 2;
    pub const MAX_CIRCLES: u32 = 256;
    pub const DEFAULT_CIRCLES: u32 = 20;

    /// Spawned radius is (uniform(0, JITTER) + BASE) / sqrt(n)
    pub const SPAWN_RADIUS_JITTER: f32 = 0.5;
    pub const SPAWN_RADIUS_BASE: f32 = 0.2;
    /// Spawned velocity components are uniform in [-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED]
    pub const SPAWN_MAX_SPEED: f32 = 1.0;

    /// Largest elapsed time a frame clock will report (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Perpendicular of a vector (rotated +90 degrees)
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}
