//! glint renderer - recursive Whitted-style ray tracing.
//!
//! The rendering pipeline: the render loop supersamples each pixel through
//! the anti-aliasing table, the tracer resolves the nearest intersection,
//! evaluates per-light illumination with shadow probes, and follows the
//! specular mirror reflection to a bounded depth.

mod antialias;
mod bucket;
mod renderer;
mod tracer;

pub use antialias::AntiAliasingTable;
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE,
};
pub use renderer::{
    color_to_rgba, linear_to_gamma, ray_generator, render, render_pixel, ImageBuffer,
    RenderConfig,
};
pub use tracer::{
    illuminate, is_occluded, ray_trace, reflect, resolve_intersection, REFLECTION_ATTENUATION,
};

/// Re-export the scene API and math types used at this crate's seams
pub use glint_math::{Ray, Vec3};
pub use glint_scene::{Color, Scene};
