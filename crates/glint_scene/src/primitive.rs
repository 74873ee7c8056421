//! Intersectable trait and intersection record for ray-primitive tests.

use glint_math::{Ray, Vec3};

/// Record of a ray-primitive intersection.
///
/// Created fresh by each intersection test; never mutated incrementally.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Point of intersection
    pub position: Vec3,
    /// Surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Ray parameter t where the intersection occurs (t >= 0)
    pub relative: f32,
}

/// Trait for primitives that can be intersected by rays.
///
/// Every primitive variant implements the same contract; the rest of the
/// pipeline is primitive-agnostic and pays one dynamic dispatch per
/// primitive per ray.
pub trait Intersectable: Send + Sync {
    /// Test the ray against this primitive.
    ///
    /// Returns the nearest valid intersection along the ray, or `None` if
    /// the ray misses. Negative ray parameters are never reported.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;
}
