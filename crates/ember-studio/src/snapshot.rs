use std::path::Path;

use anyhow::{Context, Result};
use ember_raster::{FrameCapture, Renderer};
use image::RgbaImage;

use crate::scene;

/// Renders one frame of the scene at `t = 0` and writes it as PNG.
pub fn write(path: &Path, width: u32, height: u32) -> Result<()> {
    let mut renderer = Renderer::new(width, height);
    scene::register_shaders(&mut renderer);
    scene::draw(&mut renderer, 0.0);

    let mut capture = FrameCapture::new();
    renderer.render(&mut capture);

    let (w, h) = capture.size();
    let image = RgbaImage::from_raw(w, h, capture.take_pixels())
        .context("captured frame does not match its reported size")?;

    image
        .save(path)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;

    log::info!("snapshot written: {} ({w}x{h})", path.display());
    Ok(())
}
