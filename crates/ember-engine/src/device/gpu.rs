use anyhow::{Context, Result, bail};
use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// How the presentation device and its surface are opened.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// FIFO is supported everywhere and is what a frame-per-redraw loop wants.
    pub present_mode: wgpu::PresentMode,

    /// Falls back to the first supported mode when unset or unsupported.
    pub alpha_mode: Option<CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// The device a window's finished frames are uploaded to, plus that window's surface.
///
/// The surface borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry. While the window has a zero-sized side the surface stays
/// unconfigured and no frame can be acquired.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
}

/// One acquired surface texture and the encoder recording into it.
///
/// Holding the surface texture blocks acquisition of the next one; submit promptly.
pub struct GpuFrame {
    pub(crate) surface_texture: wgpu::SurfaceTexture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) encoder: wgpu::CommandEncoder,
}

/// How a failed surface acquisition is handled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum SurfaceErrorAction {
    /// Reconfigure and retry next frame.
    Reconfigure,
    SkipFrame,
    /// Commonly OOM; the window cannot present anymore.
    Fatal,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        log::info!("gpu adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ember device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open the GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no supported formats")?;

        let size = window.inner_size();
        let (width, height) = surface_extent(size);

        let mut gpu = Gpu {
            surface,
            device,
            queue,
            config: wgpu::SurfaceConfiguration {
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                format,
                width,
                height,
                present_mode: init.present_mode,
                alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
                view_formats: vec![],
                desired_maximum_frame_latency: init.desired_maximum_frame_latency,
            },
            size,
        };
        gpu.configure();

        Ok(gpu)
    }

    pub fn surface_format(&self) -> TextureFormat {
        self.config.format
    }

    /// Window size in physical pixels. May be 0x0 while minimized.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Tracks a new window size; the surface is reconfigured once both sides are non-zero.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
        (self.config.width, self.config.height) = surface_extent(size);
        self.configure();
    }

    /// Acquires the next surface texture with an encoder for it.
    ///
    /// `Ok(None)` means this frame is skipped: the window is not drawable or the surface
    /// needed attention. An error means the surface is gone for good.
    pub fn acquire(&mut self) -> Result<Option<GpuFrame>> {
        if !is_drawable(self.size) {
            return Ok(None);
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                match surface_error_action(&err) {
                    SurfaceErrorAction::Fatal => bail!("surface error: {err}"),
                    SurfaceErrorAction::Reconfigure => self.configure(),
                    SurfaceErrorAction::SkipFrame => {}
                }
                log::debug!("surface frame skipped: {err}");
                return Ok(None);
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ember frame encoder"),
            });

        Ok(Some(GpuFrame {
            surface_texture,
            view,
            encoder,
        }))
    }

    /// Submits the frame's commands and presents its surface texture.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Leaves the surface alone while the window is not drawable.
    fn configure(&mut self) {
        if !is_drawable(self.size) {
            log::debug!(
                "surface configure deferred at {}x{}",
                self.size.width,
                self.size.height
            );
            return;
        }

        self.surface.configure(&self.device, &self.config);
        log::debug!(
            "surface configured: {:?} {}x{}",
            self.config.format,
            self.config.width,
            self.config.height
        );
    }
}

/// A surface can only be configured and drawn with both sides non-zero.
pub fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// Extent stored in the surface configuration; never zero.
fn surface_extent(size: PhysicalSize<u32>) -> (u32, u32) {
    (size.width.max(1), size.height.max(1))
}

fn surface_error_action(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigure,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

fn choose_surface_format(formats: &[TextureFormat], prefer_srgb: bool) -> Option<TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        let preferred = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Rgba8UnormSrgb];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    Some(first)
}

fn choose_alpha_mode(
    supported: &[CompositeAlphaMode],
    requested: Option<CompositeAlphaMode>,
) -> CompositeAlphaMode {
    requested
        .filter(|mode| supported.contains(mode))
        .or_else(|| supported.first().copied())
        .unwrap_or(CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn zero_sized_window_is_not_drawable() {
        assert!(!is_drawable(PhysicalSize::new(0, 0)));
        assert!(!is_drawable(PhysicalSize::new(640, 0)));
        assert!(!is_drawable(PhysicalSize::new(0, 480)));
        assert!(is_drawable(PhysicalSize::new(1, 1)));
    }

    #[test]
    fn surface_extent_never_configures_zero() {
        assert_eq!(surface_extent(PhysicalSize::new(0, 0)), (1, 1));
        assert_eq!(surface_extent(PhysicalSize::new(0, 300)), (1, 300));
        assert_eq!(surface_extent(PhysicalSize::new(800, 600)), (800, 600));
    }

    // ── surface errors ────────────────────────────────────────────────────

    #[test]
    fn lost_and_outdated_surfaces_are_reconfigured() {
        assert_eq!(surface_error_action(&SurfaceError::Lost), SurfaceErrorAction::Reconfigure);
        assert_eq!(
            surface_error_action(&SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigure
        );
    }

    #[test]
    fn only_out_of_memory_is_fatal() {
        assert_eq!(surface_error_action(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(surface_error_action(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(surface_error_action(&SurfaceError::Other), SurfaceErrorAction::SkipFrame);
    }

    // ── capabilities ──────────────────────────────────────────────────────

    #[test]
    fn srgb_format_preferred_when_offered() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn unsupported_alpha_mode_falls_back_to_first() {
        let supported = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }
}
