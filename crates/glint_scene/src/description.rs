//! JSON scene description loading.
//!
//! The tracer core never validates scene data; physical preconditions
//! (positive radii, at least one primitive) are enforced here, at the
//! loading boundary.

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::Camera;
use crate::light::Light;
use crate::material::Material;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("scene contains no primitives")]
    NoPrimitives,
}

/// Result type for scene loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Camera parameters as stored in a scene file.
///
/// The aspect ratio is supplied at build time from the output resolution,
/// not stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraDescription {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
}

/// One sphere with its material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

/// A complete scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub camera: CameraDescription,
    pub objects: Vec<ObjectDescription>,
    pub lights: Vec<Light>,
}

impl SceneFile {
    /// Load a scene file from disk.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a scene file from a JSON string.
    pub fn from_json(text: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate the description and build a renderable [`Scene`].
    pub fn build(&self, aspect: f32) -> LoadResult<Scene> {
        if self.objects.is_empty() {
            return Err(LoadError::NoPrimitives);
        }
        for (index, object) in self.objects.iter().enumerate() {
            if !(object.radius > 0.0) {
                return Err(LoadError::InvalidRadius {
                    index,
                    radius: object.radius,
                });
            }
        }

        let camera = Camera::new(
            self.camera.look_from,
            self.camera.look_at,
            self.camera.up,
            self.camera.vfov,
            aspect,
        );

        let mut scene = Scene::new(camera);
        for object in &self.objects {
            scene.add_primitive(
                Box::new(Sphere::new(object.center, object.radius)),
                object.material,
            );
        }
        for light in &self.lights {
            scene.add_light(*light);
        }

        log::info!(
            "Loaded scene: {} primitives, {} lights",
            scene.primitive_count(),
            scene.light_count()
        );

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_JSON: &str = r#"{
        "camera": {
            "look_from": [0.0, 1.0, 4.0],
            "look_at": [0.0, 0.0, 0.0],
            "up": [0.0, 1.0, 0.0],
            "vfov": 60.0
        },
        "objects": [
            {
                "center": [0.0, 0.0, 0.0],
                "radius": 1.0,
                "material": { "color": [0.8, 0.2, 0.2], "shading": "lambert" }
            },
            {
                "center": [2.0, 0.0, 0.0],
                "radius": 0.5,
                "material": {
                    "color": [0.2, 0.2, 0.8],
                    "shading": { "phong": { "specular": 0.5, "shininess": 32.0 } }
                }
            }
        ],
        "lights": [
            { "position": [5.0, 5.0, 5.0], "color": [1.0, 1.0, 1.0], "power": 40.0 }
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let file = SceneFile::from_json(SCENE_JSON).expect("valid scene JSON");
        let scene = file.build(16.0 / 9.0).expect("valid scene");

        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert!((scene.light(0).power - 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let file = SceneFile::from_json(SCENE_JSON).unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let again = SceneFile::from_json(&json).unwrap();

        assert_eq!(again.objects.len(), file.objects.len());
        assert_eq!(again.lights.len(), file.lights.len());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut file = SceneFile::from_json(SCENE_JSON).unwrap();
        file.objects[1].radius = -0.5;

        let err = file.build(1.0).err().expect("build must fail");
        match err {
            LoadError::InvalidRadius { index, .. } => assert_eq!(index, 1),
            other => panic!("expected InvalidRadius, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_scene() {
        let mut file = SceneFile::from_json(SCENE_JSON).unwrap();
        file.objects.clear();

        assert!(matches!(file.build(1.0), Err(LoadError::NoPrimitives)));
    }
}
