//! Scene container: camera, primitives, materials, lights.

use crate::camera::Camera;
use crate::light::Light;
use crate::material::Material;
use crate::primitive::Intersectable;

/// A complete scene ready for rendering.
///
/// Primitives and materials are parallel collections sharing indices: the
/// material of `primitive(i)` is `material(i)`. Everything is immutable once
/// tracing begins, so the scene can be shared by reference across render
/// workers without synchronization.
pub struct Scene {
    camera: Camera,
    primitives: Vec<Box<dyn Intersectable>>,
    materials: Vec<Material>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            primitives: Vec::new(),
            materials: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a primitive and its material, keeping the collections parallel.
    /// Returns the primitive's index.
    pub fn add_primitive(&mut self, primitive: Box<dyn Intersectable>, material: Material) -> usize {
        let index = self.primitives.len();
        self.primitives.push(primitive);
        self.materials.push(material);
        index
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the scene camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get the number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get the primitive at the given index.
    pub fn primitive(&self, index: usize) -> &dyn Intersectable {
        self.primitives[index].as_ref()
    }

    /// Get the material paired with the primitive at the given index.
    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get the light at the given index.
    pub fn light(&self, index: usize) -> &Light {
        &self.lights[index]
    }

    /// Iterate over all lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;
    use crate::sphere::Sphere;
    use glint_math::Vec3;

    fn test_camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, 1.0)
    }

    #[test]
    fn test_parallel_indices() {
        let mut scene = Scene::new(test_camera());

        let red = Material::lambert(Color::new(1.0, 0.0, 0.0));
        let blue = Material::lambert(Color::new(0.0, 0.0, 1.0));
        let a = scene.add_primitive(Box::new(Sphere::new(Vec3::ZERO, 1.0)), red);
        let b = scene.add_primitive(Box::new(Sphere::new(Vec3::X, 0.5)), blue);

        assert_eq!((a, b), (0, 1));
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.material(0).color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(scene.material(1).color, Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_lights() {
        let mut scene = Scene::new(test_camera());
        scene.add_light(Light::new(Vec3::Y, Color::ONE, 2.0));

        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.light(0).power, 2.0);
    }
}
