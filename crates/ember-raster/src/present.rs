//! Handing finished frames to a display surface.

use anyhow::Result;

/// A finished frame, borrowed from the renderer for the duration of a present call.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// Consumer of finished frames (window surface, file writer, test capture).
pub trait Presenter {
    fn present(&mut self, frame: Frame<'_>) -> Result<()>;
}

/// Keeps a copy of the most recently presented frame.
#[derive(Debug, Default, Clone)]
pub struct FrameCapture {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    presented: u64,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of frames presented so far.
    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Moves the last frame's bytes out, leaving the capture empty.
    pub fn take_pixels(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pixels)
    }
}

impl Presenter for FrameCapture {
    fn present(&mut self, frame: Frame<'_>) -> Result<()> {
        anyhow::ensure!(
            frame.pixels.len() == frame.width as usize * frame.height as usize * 4,
            "frame is {} bytes, expected {}x{}x4",
            frame.pixels.len(),
            frame.width,
            frame.height
        );

        self.pixels.clear();
        self.pixels.extend_from_slice(frame.pixels);
        self.width = frame.width;
        self.height = frame.height;
        self.presented += 1;
        Ok(())
    }
}
