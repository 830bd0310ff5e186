use crate::coords::{Vec2, Viewport};
use crate::raster::Extent;
use crate::shader::{FragmentInput, FragmentShader};

use super::blend::blend_over;

/// RGBA8 pixel storage owned by a renderer.
///
/// Invariant: `data.len() == width * height * 4`. Resizing discards the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_size(self.width, self.height)
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(i64::from(self.width), i64::from(self.height))
    }

    /// Raw bytes, row-major RGBA.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Reallocates for a new size; the new contents are zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; byte_len(width, height)];
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        Some(self.pixels()[i])
    }

    /// Shades pixel `(x, y)` with `shader` and blends the result in.
    ///
    /// Out-of-bounds coordinates are ignored and the shader is not invoked. The shader
    /// sees the pixel center.
    pub fn write_fragment(&mut self, x: i64, y: i64, shader: &FragmentShader) {
        let Some(i) = self.index(x, y) else {
            return;
        };

        let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let color = shader(FragmentInput { screen_position: center }).color;

        let px = &mut self.pixels_mut()[i];
        *px = blend_over(*px, color);
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
