//! Camera and screen projection.

use glint_math::Vec3;

/// Pinhole camera.
///
/// The image plane sits one unit in front of the camera center; normalized
/// screen coordinates `(u, v)` in `[0, 1]^2` map onto it via
/// [`Camera::screen_position`]. Ray generation belongs to the renderer: a
/// camera ray runs from `center()` toward the screen position.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    center: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera from position, target, up vector, vertical field of
    /// view in degrees, and image aspect ratio (width / height).
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let viewport_height = 2.0 * half_height;
        let viewport_width = viewport_height * aspect;

        // Orthonormal camera basis
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left = look_from - w - horizontal / 2.0 - vertical / 2.0;

        Self {
            center: look_from,
            lower_left,
            horizontal,
            vertical,
        }
    }

    /// The camera center (ray origin for primary rays).
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// World-space position on the image plane for normalized screen
    /// coordinates `(u, v)`.
    #[inline]
    pub fn screen_position(&self, u: f32, v: f32) -> Vec3 {
        self.lower_left + u * self.horizontal + v * self.vertical
    }
}
