//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel with rayon. Safe without locking: the scene is read-only
//! during rendering and every bucket owns a disjoint pixel range.

use crate::antialias::AntiAliasingTable;
use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use glint_scene::{Color, Scene};
use rayon::prelude::*;

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of the bucket's top-left corner
    pub x: u32,
    /// Y coordinate of the bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Generate buckets covering an image, sorted center-out.
///
/// Center-out order makes the most important region of a progressive
/// preview appear first; for a batch render it is just a stable order.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    buckets.sort_by(|a, b| {
        let da = (a.x as f32 + a.width as f32 / 2.0 - center_x).powi(2)
            + (a.y as f32 + a.height as f32 / 2.0 - center_y).powi(2);
        let db = (b.x as f32 + b.width as f32 / 2.0 - center_x).powi(2)
            + (b.y as f32 + b.height as f32 / 2.0 - center_y).powi(2);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    buckets
}

/// Render a single bucket to a vector of colors in row-major order.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    aa: &AntiAliasingTable,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let kx = bucket.x + local_x;
            let ky = bucket.y + local_y;
            pixels.push(render_pixel(scene, aa, config, kx, ky, width, height));
        }
    }

    pixels
}

/// Render the scene with one rayon task per bucket.
///
/// Produces pixel-identical output to [`crate::renderer::render`]; only the
/// scheduling differs.
pub fn render_parallel(
    scene: &Scene,
    config: &RenderConfig,
    width: u32,
    height: u32,
) -> ImageBuffer {
    let aa = AntiAliasingTable::new(config.samples);
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);
    log::debug!("Rendering {} buckets of up to {DEFAULT_BUCKET_SIZE}px", buckets.len());

    let results: Vec<(Bucket, Vec<Color>)> = buckets
        .par_iter()
        .map(|bucket| {
            (
                *bucket,
                render_bucket(bucket, scene, &aa, config, width, height),
            )
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (bucket, pixels) in results {
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    image
}
