//! GPU side of presentation.
//!
//! The rasterizer produces finished RGBA8 frames on the CPU; this module uploads them
//! to a texture and draws that texture over the whole window surface.

mod blit;
mod surface;

pub use blit::{BlitPass, blit_texture_format};
pub use surface::SurfacePresenter;
