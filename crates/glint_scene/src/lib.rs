//! Scene representation for the glint ray tracer.
//!
//! Holds everything the tracer queries while rendering: the camera, the
//! indexed primitive collection with its parallel material collection, and
//! the lights. The scene is built once and read-only during rendering.

mod camera;
mod description;
mod light;
mod material;
mod primitive;
mod scene;
mod sphere;

pub use camera::Camera;
pub use description::{CameraDescription, LoadError, LoadResult, ObjectDescription, SceneFile};
pub use light::Light;
pub use material::{shade, Color, Material, ShadingKind};
pub use primitive::{Intersectable, Intersection};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export common math types
pub use glint_math::{Ray, Vec3, RAY_EPSILON};
