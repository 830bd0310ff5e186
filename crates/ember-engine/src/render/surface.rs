use anyhow::Result;
use ember_raster::{Frame, Presenter};
use winit::window::Window;

use crate::device::Gpu;
use crate::render::BlitPass;

/// Presents finished frames to a window surface through a [`BlitPass`].
///
/// Borrowed per frame from the runtime's window entry.
pub struct SurfacePresenter<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    blit: &'a mut BlitPass,
    window: &'a Window,
    fatal: bool,
}

impl<'a, 'w> SurfacePresenter<'a, 'w> {
    pub fn new(gpu: &'a mut Gpu<'w>, blit: &'a mut BlitPass, window: &'a Window) -> Self {
        Self {
            gpu,
            blit,
            window,
            fatal: false,
        }
    }

    /// Set once the surface has failed in a way no later frame can recover from.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }
}

impl Presenter for SurfacePresenter<'_, '_> {
    fn present(&mut self, frame: Frame<'_>) -> Result<()> {
        if frame.width == 0 || frame.height == 0 {
            return Ok(());
        }

        let mut target = match self.gpu.acquire() {
            Ok(Some(target)) => target,
            // Minimized, or the surface asked for this frame to be skipped.
            Ok(None) => return Ok(()),
            Err(err) => {
                self.fatal = true;
                return Err(err);
            }
        };

        self.blit.draw(&*self.gpu, &mut target, frame)?;

        self.window.pre_present_notify();
        self.gpu.submit(target);
        Ok(())
    }
}
