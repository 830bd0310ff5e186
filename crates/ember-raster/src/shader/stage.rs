use std::fmt;
use std::sync::Arc;

use crate::coords::{ColorRgba, Position, Vec2, Vec4};

use super::ShaderKind;

/// Vertex shader input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexInput {
    /// Model-space position as given to the draw call.
    pub position: Position,
}

/// Vertex shader output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position. Only `x`/`y` in `[-1, 1]` land on the target.
    pub position: Vec4,
}

/// Fragment shader input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentInput {
    /// Center of the pixel being shaded, in screen pixels.
    pub screen_position: Vec2,
}

/// Fragment shader output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentOutput {
    /// Straight-alpha color; alpha weights the blend with the existing pixel.
    pub color: ColorRgba,
}

pub type VertexShader = Arc<dyn Fn(VertexInput) -> VertexOutput + Send + Sync>;
pub type FragmentShader = Arc<dyn Fn(FragmentInput) -> FragmentOutput + Send + Sync>;

/// A shader callable of either stage.
#[derive(Clone)]
pub enum Shader {
    Vertex(VertexShader),
    Fragment(FragmentShader),
}

impl Shader {
    pub fn vertex<F>(f: F) -> Self
    where
        F: Fn(VertexInput) -> VertexOutput + Send + Sync + 'static,
    {
        Shader::Vertex(Arc::new(f))
    }

    pub fn fragment<F>(f: F) -> Self
    where
        F: Fn(FragmentInput) -> FragmentOutput + Send + Sync + 'static,
    {
        Shader::Fragment(Arc::new(f))
    }

    /// Stage the callable was written for.
    #[inline]
    pub fn stage(&self) -> ShaderKind {
        match self {
            Shader::Vertex(_) => ShaderKind::Vertex,
            Shader::Fragment(_) => ShaderKind::Fragment,
        }
    }

    #[inline]
    pub fn as_vertex(&self) -> Option<&VertexShader> {
        match self {
            Shader::Vertex(s) => Some(s),
            Shader::Fragment(_) => None,
        }
    }

    #[inline]
    pub fn as_fragment(&self) -> Option<&FragmentShader> {
        match self {
            Shader::Fragment(s) => Some(s),
            Shader::Vertex(_) => None,
        }
    }
}

impl fmt::Debug for Shader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shader::Vertex(s) => write!(f, "Shader::Vertex({:p})", Arc::as_ptr(s)),
            Shader::Fragment(s) => write!(f, "Shader::Fragment({:p})", Arc::as_ptr(s)),
        }
    }
}
