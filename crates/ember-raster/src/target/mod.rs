//! CPU render target.
//!
//! Layout: row-major, 4 bytes per pixel in `R, G, B, A` order, top-left origin.

mod blend;
mod pixel_buffer;

pub use blend::{blend_channel, blend_over, lerp};
pub use pixel_buffer::PixelBuffer;
