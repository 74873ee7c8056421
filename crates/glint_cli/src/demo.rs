//! Built-in demo scene.

use glint_math::Vec3;
use glint_scene::{Camera, Color, Light, Material, Scene, Sphere};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the demo scene: a ground sphere, three feature spheres, and a
/// jittered field of small spheres. Seeded so every run renders the same
/// image.
pub fn build(aspect: f32) -> Scene {
    let camera = Camera::new(
        Vec3::new(8.0, 2.5, 8.0),
        Vec3::new(0.0, 0.8, 0.0),
        Vec3::Y,
        35.0,
        aspect,
    );
    let mut scene = Scene::new(camera);

    // Ground
    scene.add_primitive(
        Box::new(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0)),
        Material::lambert(Color::new(0.5, 0.5, 0.5)),
    );

    // Three feature spheres
    scene.add_primitive(
        Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0)),
        Material::phong(Color::new(0.7, 0.6, 0.5), 0.8, 64.0),
    );
    scene.add_primitive(
        Box::new(Sphere::new(Vec3::new(-2.5, 1.0, 0.5), 1.0)),
        Material::lambert(Color::new(0.4, 0.2, 0.1)),
    );
    scene.add_primitive(
        Box::new(Sphere::new(Vec3::new(2.5, 1.0, -0.5), 1.0)),
        Material::phong(Color::new(0.2, 0.3, 0.7), 0.5, 16.0),
    );

    // Small jittered spheres around the feature spheres
    let mut rng = StdRng::seed_from_u64(7);
    for a in -4..4 {
        for b in -4..4 {
            let center = Vec3::new(
                a as f32 + 0.8 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.8 * rng.gen::<f32>(),
            );

            // Keep clear of the feature spheres
            if (center - Vec3::new(0.0, 0.2, 0.0)).length() < 1.4
                || (center - Vec3::new(-2.5, 0.2, 0.5)).length() < 1.4
                || (center - Vec3::new(2.5, 0.2, -0.5)).length() < 1.4
            {
                continue;
            }

            let color = Color::new(
                0.2 + 0.8 * rng.gen::<f32>(),
                0.2 + 0.8 * rng.gen::<f32>(),
                0.2 + 0.8 * rng.gen::<f32>(),
            );
            let material = if rng.gen::<f32>() < 0.3 {
                Material::phong(color, 0.6, 32.0)
            } else {
                Material::lambert(color)
            };
            scene.add_primitive(Box::new(Sphere::new(center, 0.2)), material);
        }
    }

    scene.add_light(Light::new(Vec3::new(10.0, 12.0, 6.0), Color::ONE, 220.0));
    scene.add_light(Light::new(
        Vec3::new(-8.0, 6.0, -4.0),
        Color::new(0.9, 0.85, 0.7),
        80.0,
    ));

    scene
}
