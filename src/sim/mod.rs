//! Simulation core
//!
//! All physics lives here. This module must stay deterministic:
//! - Elapsed time is supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (by population index)
//! - No rendering or platform dependencies

pub mod circle;
pub mod clock;
pub mod collision;
pub mod history;
pub mod spawn;
pub mod state;
pub mod step;
pub mod wall;

pub use circle::{Circle, CircleState, WallDistances};
pub use clock::FrameClock;
pub use collision::{PairContact, is_overlapping, pair_contact, penetration, resolve_impulse};
pub use history::OverlapHistory;
pub use spawn::spawn;
pub use state::Simulation;
pub use step::{StepReport, resize, step, step_with};
pub use wall::{Wall, reflect_off_walls, touches_any_wall, touches_wall, wall_distance};

/// Ordered circles; the index identifies a circle in the [`OverlapHistory`]
pub type Population = Vec<Circle>;
