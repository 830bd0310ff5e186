use ember_raster::{Presenter, Renderer};
use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::render::{BlitPass, SurfacePresenter};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub blit: &'a mut BlitPass,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Surface size in physical pixels; what a renderer's buffer should match.
    pub fn surface_size(&self) -> (u32, u32) {
        let size = self.gpu.size();
        (size.width, size.height)
    }

    /// Presents the renderer's buffer to the window through [`Renderer::render`].
    ///
    /// Present failures reach the renderer's diagnostic sink. Only a fatal surface error
    /// ends the app.
    pub fn present(&mut self, renderer: &mut Renderer) -> AppControl {
        let mut presenter =
            SurfacePresenter::new(&mut *self.gpu, &mut *self.blit, self.window.window);
        present_with(renderer, &mut presenter, SurfacePresenter::is_fatal)
    }
}

fn present_with<P>(
    renderer: &mut Renderer,
    presenter: &mut P,
    is_fatal: impl FnOnce(&P) -> bool,
) -> AppControl
where
    P: Presenter,
{
    renderer.render(&mut *presenter);
    if is_fatal(&*presenter) {
        AppControl::Exit
    } else {
        AppControl::Continue
    }
}
