//! Per-draw-call options.

/// Names of the registered shaders a draw call runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderPair {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderPair {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Options for [`Renderer::draw_points`](crate::Renderer::draw_points).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointOptions {
    pub shader: ShaderPair,
}

impl PointOptions {
    pub fn new(shader: ShaderPair) -> Self {
        Self { shader }
    }
}

/// Options for [`Renderer::draw_polygon`](crate::Renderer::draw_polygon).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonOptions {
    pub shader: ShaderPair,
    /// Fill the interior. Ignored for two-point input, which is always an open segment.
    pub fill: bool,
}

impl PolygonOptions {
    pub fn outline(shader: ShaderPair) -> Self {
        Self { shader, fill: false }
    }

    pub fn filled(shader: ShaderPair) -> Self {
        Self { shader, fill: true }
    }
}
