//! Materials and the local shading model.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Selector for the local reflectance model applied at a hit point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingKind {
    /// Cosine-weighted diffuse only.
    Lambert,
    /// Diffuse plus a specular lobe around the mirror direction.
    Phong {
        /// Strength of the specular lobe
        specular: f32,
        /// Exponent of the specular lobe (higher = tighter highlight)
        shininess: f32,
    },
}

/// Surface material: a base color and a shading-model selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Base object color (RGB, 0-1)
    pub color: Color,
    /// Local reflectance model
    pub shading: ShadingKind,
}

impl Material {
    /// Create a diffuse material with the given color.
    pub fn lambert(color: Color) -> Self {
        Self {
            color,
            shading: ShadingKind::Lambert,
        }
    }

    /// Create a Phong material with the given color and specular lobe.
    pub fn phong(color: Color, specular: f32, shininess: f32) -> Self {
        Self {
            color,
            shading: ShadingKind::Phong {
                specular,
                shininess,
            },
        }
    }
}

/// Evaluate the local shading model at a surface point.
///
/// Returns the unattenuated surface response for a single light; the caller
/// scales it by light power, light color, and inverse-square falloff. The
/// shading model is a swappable strategy selected per material.
pub fn shade(
    kind: ShadingKind,
    object_color: Color,
    point: Vec3,
    light_position: Vec3,
    normal: Vec3,
    eye_position: Vec3,
) -> Color {
    let to_light = (light_position - point).normalize();
    let diffuse = normal.dot(to_light).max(0.0);

    match kind {
        ShadingKind::Lambert => object_color * diffuse,
        ShadingKind::Phong {
            specular,
            shininess,
        } => {
            let mut c = object_color * diffuse;
            if diffuse > 0.0 {
                // Mirror direction of the light about the normal
                let mirrored = 2.0 * normal.dot(to_light) * normal - to_light;
                let to_eye = (eye_position - point).normalize();
                let lobe = mirrored.dot(to_eye).max(0.0).powf(shininess);
                c += specular * lobe * Color::ONE;
            }
            c
        }
    }
}
