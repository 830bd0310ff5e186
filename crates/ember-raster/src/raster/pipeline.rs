use crate::coords::{Position, Vec2, Vec4, Viewport};
use crate::shader::{VertexInput, VertexShader};

/// A vertex after the vertex stage: clip position plus its screen mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectedVertex {
    pub clip: Vec4,
    pub screen: Vec2,
}

impl ProjectedVertex {
    #[inline]
    pub fn in_clip_square(&self) -> bool {
        self.clip.in_clip_square()
    }
}

/// Runs `shader` on `position` and maps the result to screen space.
///
/// Returns `None` when the input or the shader output has a non-finite component.
/// Points outside the clip square are still returned; callers decide what to cull.
pub fn project(position: Position, shader: &VertexShader, viewport: Viewport) -> Option<ProjectedVertex> {
    if !position.is_finite() {
        return None;
    }

    let clip = shader(VertexInput { position }).position;
    if !clip.is_finite() {
        return None;
    }

    Some(ProjectedVertex {
        clip,
        screen: viewport.clip_to_screen(clip),
    })
}

/// Projects both ends of a segment.
///
/// The segment is dropped if either end fails [`project`], or if both ends lie outside
/// the clip square. That is the only culling: a segment with one end far outside
/// keeps its off-target screen coordinates.
pub fn project_segment(
    a: Position,
    b: Position,
    shader: &VertexShader,
    viewport: Viewport,
) -> Option<(ProjectedVertex, ProjectedVertex)> {
    let pa = project(a, shader, viewport)?;
    let pb = project(b, shader, viewport)?;

    if !pa.in_clip_square() && !pb.in_clip_square() {
        return None;
    }

    Some((pa, pb))
}
