//! glint - a Whitted-style recursive ray tracer.

mod demo;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use glint_renderer::{render, render_parallel, ImageBuffer, RenderConfig};
use glint_scene::SceneFile;

/// Log levels usable as a clap value
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style recursive ray tracer")]
struct Args {
    /// Scene description file (JSON); renders the built-in demo scene if omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Supersampling grid size per axis (s x s subsamples per pixel)
    #[arg(long, short = 's', default_value = "5")]
    samples: usize,

    /// Reflection depth budget per primary ray
    #[arg(long, default_value = "3")]
    depth: u32,

    /// Render single-threaded instead of with parallel buckets
    #[arg(long)]
    serial: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let aspect = args.width as f32 / args.height as f32;
    let scene = match &args.scene {
        Some(path) => SceneFile::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?
            .build(aspect)
            .context("failed to build scene")?,
        None => {
            log::info!("No scene file given, rendering the built-in demo scene");
            demo::build(aspect)
        }
    };

    let config = RenderConfig {
        samples: args.samples,
        max_depth: args.depth,
    };
    log::info!(
        "Rendering {}x{} with {}x{} samples/pixel, reflection depth {}",
        args.width,
        args.height,
        config.samples,
        config.samples,
        config.max_depth
    );

    let start = Instant::now();
    let image = if args.serial {
        render(&scene, &config, args.width, args.height)
    } else {
        render_parallel(&scene, &config, args.width, args.height)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    save_png(&image, &args.output)?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}

/// Write the render buffer out as a PNG.
fn save_png(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    let mut out = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.to_rgba())
        .context("render buffer size mismatch")?;
    // Screen v runs bottom-up, PNG rows run top-down
    image::imageops::flip_vertical_in_place(&mut out);
    out.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
