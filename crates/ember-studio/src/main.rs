use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ember_engine::device::GpuInit;
use ember_engine::logging::{LoggingConfig, init_logging};
use ember_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

mod app;
mod scene;
mod snapshot;

#[derive(Debug, Parser)]
#[command(name = "ember-studio", version, about = "Software rasterizer demo", long_about = None)]
struct Arguments {
    /// Render one frame to this PNG file instead of opening a window
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Target size as WIDTHxHEIGHT (window size in logical pixels, or snapshot size)
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    size: (u32, u32),
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    init_logging(LoggingConfig::default());

    let (width, height) = args.size;

    if let Some(path) = args.snapshot {
        return snapshot::write(&path, width, height);
    }

    let config = RuntimeConfig {
        title: "ember studio".to_string(),
        initial_size: LogicalSize::new(f64::from(width), f64::from(height)),
    };

    Runtime::run(config, GpuInit::default(), app::StudioApp::new())
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;

    let w: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;

    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got {w}x{h}"));
    }
    Ok((w, h))
}
