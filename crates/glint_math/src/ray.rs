//! Ray type for ray tracing.
//!
//! A ray is defined by an origin point and a direction vector. The direction
//! is not required to be normalized; the intersection math stays correct for
//! any non-zero length via the quadratic coefficient `a = dot(d, d)`.

use glam::Vec3;

/// Offset applied to secondary rays so they cannot re-intersect the surface
/// they were spawned from due to floating-point rounding.
pub const RAY_EPSILON: f32 = 1e-4;

/// A ray with origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (not necessarily normalized)
    direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Return the ray advanced by [`RAY_EPSILON`] along its own direction.
    ///
    /// Used for shadow probes: the probe starts on a surface, and without the
    /// offset it would immediately re-hit that surface.
    #[inline]
    pub fn offset(&self) -> Self {
        Self {
            origin: self.origin + RAY_EPSILON * self.direction,
            direction: self.direction,
        }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}
