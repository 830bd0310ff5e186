//! Vector, color and surface-size value types used by the rasterizer.
//!
//! Spaces:
//! - model space: whatever the caller feeds a vertex shader (2, 3 or 4 components)
//! - clip space: `[-1, 1]²`, +Y up, produced by vertex shaders
//! - screen space: pixels, origin top-left, +X right, +Y down

mod color;
mod position;
mod vec2;
mod vec3;
mod vec4;
mod viewport;

pub use color::ColorRgba;
pub use position::Position;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use viewport::Viewport;
