//! GPU device + surface management.
//!
//! Opens the wgpu adapter/device/queue for a window, keeps its surface configured to the
//! window size and hands out per-frame encoders.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, is_drawable};
