//! Sphere primitive for ray tracing.

use crate::primitive::{Intersectable, Intersection};
use glint_math::{Ray, Vec3};

/// Discriminant tolerance below which the ray is treated as tangent.
const DELTA_TOLERANCE: f32 = 1e-8;

/// Squared direction length below which the ray is degenerate.
const DEGENERATE_DIRECTION: f32 = 1e-12;

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn record(&self, ray: &Ray, t: f32) -> Intersection {
        let position = ray.at(t);
        Intersection {
            position,
            normal: (position - self.center).normalize(),
            relative: t,
        }
    }
}

impl Intersectable for Sphere {
    /// Ray-sphere intersection via the quadratic `a t^2 + b t + c = 0`.
    ///
    /// The ray direction is treated as a free vector: `a = dot(d, d)` keeps
    /// the roots correct for non-unit directions.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let a = d.dot(d);
        // Zero-length direction has no well-defined intersection
        if a < DEGENERATE_DIRECTION {
            return None;
        }

        let b = 2.0 * oc.dot(d);
        let c = oc.dot(oc) - self.radius * self.radius;
        let delta = b * b - 4.0 * a * c;

        if delta > DELTA_TOLERANCE {
            let sqrt_delta = delta.sqrt();
            let t1 = (-b - sqrt_delta) / (2.0 * a);
            let t2 = (-b + sqrt_delta) / (2.0 * a);

            if t1 < 0.0 && t2 < 0.0 {
                // Sphere entirely behind the ray origin
                return None;
            }
            let t = if t1 < 0.0 || t2 < 0.0 {
                // Origin inside the sphere: take the exit point
                t1.max(t2)
            } else {
                // Nearer entry point
                t1.min(t2)
            };
            return Some(self.record(ray, t));
        }

        if delta >= -DELTA_TOLERANCE {
            // Tangent: single grazing root
            let t = -b / (2.0 * a);
            if t < 0.0 {
                return None;
            }
            return Some(self.record(ray, t));
        }

        None
    }
}
