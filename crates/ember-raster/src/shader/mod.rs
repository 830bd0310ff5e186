//! Programmable stages and their registry.
//!
//! A vertex shader maps a model-space [`Position`](crate::coords::Position) to a clip
//! position; a fragment shader maps a screen position to a color. Both are plain
//! shared closures.

mod kind;
mod registry;
mod stage;

pub use kind::{ShaderKind, ShaderOptions, UnknownShaderKind};
pub use registry::ShaderRegistry;
pub use stage::{
    FragmentInput, FragmentOutput, FragmentShader, Shader, VertexInput, VertexOutput,
    VertexShader,
};
