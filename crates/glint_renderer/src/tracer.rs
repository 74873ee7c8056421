//! Core ray tracing: nearest-hit resolution, shadow probing, illumination,
//! and bounded specular recursion.

use glint_math::{Ray, Vec3, RAY_EPSILON};
use glint_scene::{shade, Color, Intersection, Material, Scene};

/// Attenuation applied to each additional reflection bounce.
pub const REFLECTION_ATTENUATION: f32 = 0.2;

/// Divisor for the flat shadow fallback (`material.color / 10`).
///
/// Not physically derived; kept for compatibility with the reference
/// behavior. See DESIGN.md.
const SHADOW_FALLBACK_DIVISOR: f32 = 10.0;

/// Find the globally nearest intersection of the ray across all primitives.
///
/// Linear scan in index order with a strict less-than comparison, so the
/// first primitive wins exact ties and the result is deterministic. Returns
/// the primitive index alongside the intersection data.
pub fn resolve_intersection(ray: &Ray, scene: &Scene) -> Option<(usize, Intersection)> {
    let mut nearest = None;
    let mut min_dist = f32::INFINITY;

    for k in 0..scene.primitive_count() {
        if let Some(hit) = scene.primitive(k).intersect(ray) {
            if hit.relative < min_dist {
                min_dist = hit.relative;
                nearest = Some((k, hit));
            }
        }
    }

    nearest
}

/// Test whether any primitive blocks the segment from `point` to the light.
///
/// The probe ray is epsilon-offset along its own direction so it cannot
/// re-hit the surface it starts on; no primitive-exclusion list is needed.
/// Hits beyond the light do not count as occlusion.
pub fn is_occluded(point: Vec3, light_position: Vec3, scene: &Scene) -> bool {
    let to_light = light_position - point;
    let light_distance = to_light.length();
    let probe = Ray::new(point, to_light.normalize()).offset();

    for k in 0..scene.primitive_count() {
        if let Some(hit) = scene.primitive(k).intersect(&probe) {
            if hit.relative <= light_distance {
                return true;
            }
        }
    }

    false
}

/// Accumulate direct illumination at a hit point over every light.
///
/// Shadowed lights contribute the flat `material.color / 10` fallback;
/// visible lights contribute the local shading model scaled by light power,
/// light color, and inverse-square falloff. No clamping happens here.
pub fn illuminate(material: &Material, intersection: &Intersection, scene: &Scene) -> Color {
    let p = intersection.position;
    let mut color = Color::ZERO;

    for light in scene.lights() {
        if is_occluded(p, light.position, scene) {
            color += material.color / SHADOW_FALLBACK_DIVISOR;
        } else {
            let shading = shade(
                material.shading,
                material.color,
                p,
                light.position,
                intersection.normal,
                scene.camera().center(),
            );
            color += light.power * light.color * shading / (p - light.position).length_squared();
        }
    }

    color
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Trace a ray through the scene with a bounded reflection budget.
///
/// Misses return black at every recursion level. Hits accumulate direct
/// illumination plus, while `depth > 0`, the mirror-reflected ray's color
/// attenuated by [`REFLECTION_ATTENUATION`]. The reflected ray starts
/// epsilon-offset along the surface normal to avoid self-intersection.
pub fn ray_trace(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    let Some((index, hit)) = resolve_intersection(ray, scene) else {
        return Color::ZERO;
    };

    let material = scene.material(index);
    let mut color = illuminate(material, &hit, scene);

    if depth > 0 {
        let reflected = Ray::new(
            hit.position + RAY_EPSILON * hit.normal,
            reflect(ray.direction(), hit.normal),
        );
        color += REFLECTION_ATTENUATION * ray_trace(&reflected, scene, depth - 1);
    }

    color
}
