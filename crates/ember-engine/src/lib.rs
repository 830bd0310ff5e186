//! Ember engine crate.
//!
//! Platform + GPU host for the software rasterizer: window loop, device/surface,
//! blit presentation, frame timing and logging setup.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
