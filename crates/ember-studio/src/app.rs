use ember_engine::core::{App, AppControl, FrameCtx};
use ember_raster::Renderer;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::scene;

/// Windowed host: redraws the scene every frame at the surface's size.
pub struct StudioApp {
    renderer: Renderer,
}

impl StudioApp {
    pub fn new() -> Self {
        let mut renderer = Renderer::new(1, 1);
        scene::register_shaders(&mut renderer);
        Self { renderer }
    }
}

impl Default for StudioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for StudioApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (width, height) = ctx.surface_size();
        if width == 0 || height == 0 {
            return AppControl::Continue;
        }
        if self.renderer.size() != (width, height) {
            self.renderer.resize(width, height);
        }

        scene::draw(&mut self.renderer, ctx.time.elapsed);

        ctx.present(&mut self.renderer)
    }
}
