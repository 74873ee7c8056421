//! Render loop: per-pixel supersampling over the image grid.

use crate::antialias::AntiAliasingTable;
use crate::tracer::ray_trace;
use glint_math::Ray;
use glint_scene::{Camera, Color, Scene};

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Supersampling grid size per axis (S x S subsamples per pixel)
    pub samples: usize,
    /// Initial reflection depth budget per primary ray
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples: 5,
            max_depth: 3,
        }
    }
}

/// Generate the camera ray through normalized screen coordinates `(u, v)`.
///
/// Origin is the camera center; the direction toward the screen position is
/// deliberately left unnormalized, consistent with the scale-correct
/// intersection quadratic.
pub fn ray_generator(camera: &Camera, u: f32, v: f32) -> Ray {
    let screen = camera.screen_position(u, v);
    Ray::new(camera.center(), screen - camera.center())
}

/// Pixel index to normalized coordinate denominator; a 1-pixel axis maps to
/// coordinate 0 instead of dividing by zero.
#[inline]
fn axis_span(n: u32) -> f32 {
    if n > 1 {
        (n - 1) as f32
    } else {
        1.0
    }
}

/// Render one pixel with S x S weighted supersampling.
pub fn render_pixel(
    scene: &Scene,
    aa: &AntiAliasingTable,
    config: &RenderConfig,
    kx: u32,
    ky: u32,
    width: u32,
    height: u32,
) -> Color {
    let u = kx as f32 / axis_span(width);
    let v = ky as f32 / axis_span(height);

    let mut color = Color::ZERO;
    for dy in 0..aa.samples() {
        let dv = aa.displacement(dy) / axis_span(height);
        for dx in 0..aa.samples() {
            let du = aa.displacement(dx) / axis_span(width);
            let ray = ray_generator(scene.camera(), u + du, v + dv);
            color += aa.weight(dx, dy) * ray_trace(&ray, scene, config.max_depth);
        }
    }

    color
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    ///
    /// Clamping and gamma correction happen here, at the output boundary,
    /// never inside the tracer.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Render the entire scene single-threaded.
///
/// See [`render_parallel`](crate::render_parallel) for the rayon-driven
/// variant; both produce identical pixels.
pub fn render(scene: &Scene, config: &RenderConfig, width: u32, height: u32) -> ImageBuffer {
    let aa = AntiAliasingTable::new(config.samples);
    let mut image = ImageBuffer::new(width, height);

    for ky in 0..height {
        for kx in 0..width {
            let color = render_pixel(scene, &aa, config, kx, ky, width, height);
            image.set(kx, ky, color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;
    use glint_scene::{Light, Material, Sphere};

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
        )
    }

    #[test]
    fn test_ray_generator_through_screen_center() {
        let camera = test_camera();
        let ray = ray_generator(&camera, 0.5, 0.5);

        assert_eq!(ray.origin(), camera.center());
        let dir = ray.direction().normalize();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_uniform_scene_renders_uniform_color() {
        // A sphere enclosing the camera, lit only by the in-shadow fallback:
        // every ray returns exactly material.color / 10, so the weighted
        // subsample average must reproduce it exactly for any sample count.
        let mut scene = Scene::new(test_camera());
        let material = Material::lambert(Color::new(0.5, 0.6, 0.7));
        scene.add_primitive(Box::new(Sphere::new(Vec3::ZERO, 100.0)), material);
        // Light outside the sphere: occluded from every interior point
        scene.add_light(Light::new(Vec3::new(0.0, 200.0, 0.0), Color::ONE, 10.0));

        let expected = material.color / 10.0;
        for samples in [1, 3, 5] {
            let config = RenderConfig {
                samples,
                max_depth: 0,
            };
            let image = render(&scene, &config, 4, 4);
            for y in 0..4 {
                for x in 0..4 {
                    assert!(
                        (image.get(x, y) - expected).length() < 1e-5,
                        "pixel ({x},{y}) with {samples} samples"
                    );
                }
            }
        }
    }

    #[test]
    fn test_render_hits_centered_sphere() {
        let mut scene = Scene::new(test_camera());
        scene.add_primitive(
            Box::new(Sphere::new(Vec3::ZERO, 1.0)),
            Material::lambert(Color::new(0.8, 0.2, 0.2)),
        );
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 5.0), Color::ONE, 50.0));

        let config = RenderConfig::default();
        let image = render(&scene, &config, 9, 9);

        // Center pixel looks straight at the lit sphere
        assert!(image.get(4, 4).length() > 0.0);
        // Corner pixel misses everything: black background
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_color_to_rgba_clamps_and_gamma_corrects() {
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(4.0, 1.0, 0.25)), [255, 255, 127, 255]);
    }

    #[test]
    fn test_image_buffer_roundtrip() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::new(1.0, 0.0, 0.0));
        assert_eq!(image.get(2, 1), Color::new(1.0, 0.0, 0.0));
        assert_eq!(image.get(0, 0), Color::ZERO);

        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 3 * 2 * 4);
    }
}
