//! Initial population generation
//!
//! Rejection sampling: candidates are drawn uniformly and discarded if they
//! overlap an accepted circle or touch a wall. There is no retry limit, so a
//! count that cannot fit in the arena never returns; callers clamp `n`.

use glam::{Vec2, Vec4};
use rand::Rng;

use super::Population;
use super::circle::Circle;
use super::collision::is_overlapping;
use super::wall::touches_any_wall;
use crate::consts::{ARENA_MAX, ARENA_MIN, SPAWN_MAX_SPEED, SPAWN_RADIUS_BASE, SPAWN_RADIUS_JITTER};

/// Draw one candidate circle sized for a population of `n`
pub fn random_circle<R: Rng + ?Sized>(rng: &mut R, n: u32) -> Circle {
    let center = Vec2::new(
        rng.random_range(ARENA_MIN..=ARENA_MAX),
        rng.random_range(ARENA_MIN..=ARENA_MAX),
    );
    let scale = (n.max(1) as f32).sqrt();
    let radius = (rng.random_range(0.0..SPAWN_RADIUS_JITTER) + SPAWN_RADIUS_BASE) / scale;
    let velocity = Vec2::new(
        rng.random_range(-SPAWN_MAX_SPEED..=SPAWN_MAX_SPEED),
        rng.random_range(-SPAWN_MAX_SPEED..=SPAWN_MAX_SPEED),
    );
    let color = Vec4::new(
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        1.0,
    );
    Circle::new(center, radius, velocity, color)
}

/// Spawn exactly `n` circles that overlap neither each other nor a wall
pub fn spawn<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Population {
    let mut circles: Population = Vec::with_capacity(n as usize);
    let mut attempts: u64 = 0;

    while circles.len() < n as usize {
        attempts += 1;
        let candidate = random_circle(rng, n);
        if touches_any_wall(&candidate) {
            continue;
        }
        if circles.iter().any(|c| is_overlapping(c, &candidate)) {
            continue;
        }
        circles.push(candidate);
    }

    log::debug!("Spawned {} circles in {} attempts", circles.len(), attempts);
    circles
}
