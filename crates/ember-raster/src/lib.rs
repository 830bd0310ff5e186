//! Ember raster crate.
//!
//! CPU rasterizer driven by user-supplied shader closures: points, polygon outlines and
//! single-span polygon fills into an RGBA8 buffer. No GPU or window dependencies; frames
//! leave through a [`Presenter`].

pub mod coords;
pub mod diagnostics;
pub mod options;
pub mod present;
pub mod raster;
pub mod shader;
pub mod target;

mod renderer;

pub use coords::{ColorRgba, Position, Vec2, Vec3, Vec4, Viewport};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use options::{PointOptions, PolygonOptions, ShaderPair};
pub use present::{Frame, FrameCapture, Presenter};
pub use renderer::Renderer;
pub use shader::{
    FragmentInput, FragmentOutput, FragmentShader, Shader, ShaderKind, ShaderOptions,
    VertexInput, VertexOutput, VertexShader,
};
