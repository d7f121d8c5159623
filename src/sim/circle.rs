//! Circle entity and motion integration

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::wall::Wall;

/// Wall distance recorded the last frame each wall was touched
///
/// Entries are never reset when the circle leaves a wall, so a later
/// approach compares against whatever was stored on the previous visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WallDistances {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
}

impl WallDistances {
    pub fn get(&self, wall: Wall) -> f32 {
        match wall {
            Wall::Up => self.up,
            Wall::Down => self.down,
            Wall::Left => self.left,
            Wall::Right => self.right,
        }
    }

    pub fn set(&mut self, wall: Wall, distance: f32) {
        match wall {
            Wall::Up => self.up = distance,
            Wall::Down => self.down = distance,
            Wall::Left => self.left = distance,
            Wall::Right => self.right = distance,
        }
    }
}

/// Serialized form of a [`Circle`]; the transform is rebuilt on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleState {
    pub center: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
    pub color: Vec4,
    pub rotation: f32,
    #[serde(default)]
    pub last_wall: WallDistances,
}

impl From<CircleState> for Circle {
    fn from(state: CircleState) -> Self {
        let mut circle = Self {
            center: state.center,
            radius: state.radius,
            velocity: state.velocity,
            color: state.color,
            rotation: state.rotation,
            transform: Mat4::IDENTITY,
            last_wall: state.last_wall,
        };
        circle.refresh_transform();
        circle
    }
}

impl From<Circle> for CircleState {
    fn from(circle: Circle) -> Self {
        Self {
            center: circle.center,
            radius: circle.radius,
            velocity: circle.velocity,
            color: circle.color,
            rotation: circle.rotation,
            last_wall: circle.last_wall,
        }
    }
}

/// A rigid disc in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CircleState", into = "CircleState")]
pub struct Circle {
    pub center: Vec2,
    /// Fixed for the circle's lifetime, must be positive
    radius: f32,
    /// Units per second
    pub velocity: Vec2,
    /// RGBA in [0, 1], fixed for the circle's lifetime
    color: Vec4,
    /// Reset to zero on every integration step
    pub rotation: f32,
    /// Derived from center, rotation and radius
    transform: Mat4,
    pub last_wall: WallDistances,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, velocity: Vec2, color: Vec4) -> Self {
        let mut circle = Self {
            center,
            radius,
            velocity,
            color,
            rotation: 0.0,
            transform: Mat4::IDENTITY,
            last_wall: WallDistances::default(),
        };
        circle.refresh_transform();
        circle
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// Model matrix for placing a unit circle: translate * rotate * scale
    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Advance position by `velocity * dt` and rebuild the transform
    ///
    /// Negative `dt` moves the circle backwards.
    pub fn integrate(&mut self, dt: f32) {
        self.rotation = 0.0;
        self.center += self.velocity * dt;
        self.refresh_transform();
    }

    fn refresh_transform(&mut self) {
        self.transform = Mat4::from_scale_rotation_translation(
            Vec3::new(self.radius, self.radius, 1.0),
            Quat::from_rotation_z(self.rotation),
            self.center.extend(0.0),
        );
    }

    /// Kinetic energy with radius² standing in for mass
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.radius * self.radius * self.velocity.length_squared()
    }
}
