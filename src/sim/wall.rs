//! Arena boundary detection and reflection
//!
//! Wall names are a fixed convention: `Up`/`Down` are the `x = ±1` lines,
//! `Right`/`Left` are the `y = ±1` lines.

use serde::{Deserialize, Serialize};

use super::circle::Circle;
use crate::consts::{ARENA_MAX, ARENA_MIN};

/// One of the four arena edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    /// x = 1
    Up,
    /// x = -1
    Down,
    /// y = -1
    Left,
    /// y = 1
    Right,
}

impl Wall {
    /// Evaluation order within a step
    pub const ALL: [Wall; 4] = [Wall::Up, Wall::Down, Wall::Left, Wall::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wall::Up => "up",
            Wall::Down => "down",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }

    /// Whether this wall reflects the x component (otherwise y)
    #[inline]
    pub fn flips_x(&self) -> bool {
        matches!(self, Wall::Up | Wall::Down)
    }
}

/// Signed distance from the circle's center to a wall (negative once past it)
#[inline]
pub fn wall_distance(circle: &Circle, wall: Wall) -> f32 {
    let c = circle.center;
    match wall {
        Wall::Up => ARENA_MAX - c.x,
        Wall::Down => c.x - ARENA_MIN,
        Wall::Right => ARENA_MAX - c.y,
        Wall::Left => c.y - ARENA_MIN,
    }
}

/// Whether the circle's edge reaches the wall
#[inline]
pub fn touches_wall(circle: &Circle, wall: Wall) -> bool {
    wall_distance(circle, wall) <= circle.radius()
}

/// Whether the circle's edge reaches any wall
pub fn touches_any_wall(circle: &Circle) -> bool {
    Wall::ALL.iter().any(|&w| touches_wall(circle, w))
}

/// Reflect the circle off every wall it is driving deeper into
///
/// For each touched wall the current distance is compared with the one stored
/// the last time that wall was touched; a smaller distance flips the velocity
/// component normal to the wall. The stored distance is then overwritten.
/// Untouched walls keep their stored distance. Returns the number of flips.
pub fn reflect_off_walls(circle: &mut Circle) -> u32 {
    let mut flips = 0;
    for wall in Wall::ALL {
        if !touches_wall(circle, wall) {
            continue;
        }
        let dist = wall_distance(circle, wall);
        if circle.last_wall.get(wall) > dist {
            if wall.flips_x() {
                circle.velocity.x = -circle.velocity.x;
            } else {
                circle.velocity.y = -circle.velocity.y;
            }
            flips += 1;
            log::trace!("wall {} flip at distance {:.4}", wall.as_str(), dist);
        }
        circle.last_wall.set(wall, dist);
    }
    flips
}
