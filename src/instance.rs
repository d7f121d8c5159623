//! Per-circle render data
//!
//! The renderer draws one unit circle per instance; this is everything it
//! needs from the simulation.

use bytemuck::{Pod, Zeroable};

use crate::sim::Circle;

/// GPU-ready instance: column-major model matrix and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn from_circle(circle: &Circle) -> Self {
        Self {
            model: circle.transform().to_cols_array_2d(),
            color: circle.color().to_array(),
        }
    }
}

impl From<&Circle> for CircleInstance {
    fn from(circle: &Circle) -> Self {
        Self::from_circle(circle)
    }
}
