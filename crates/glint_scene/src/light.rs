//! Point light sources.

use crate::material::Color;
use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// A point light with position, color, and scalar power.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Light {
    /// World-space position
    pub position: Vec3,
    /// Light color (RGB, 0-1)
    pub color: Color,
    /// Scalar power; scales the light's contribution before falloff
    pub power: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color, power: f32) -> Self {
        Self {
            position,
            color,
            power,
        }
    }
}
