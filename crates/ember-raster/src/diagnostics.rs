//! Non-fatal diagnostics.
//!
//! Nothing in the rasterizer fails hard: bad registrations and unresolvable draw calls
//! are reported through a [`DiagnosticSink`] and then skipped. The default sink
//! forwards to the `log` facade; hosts and tests can inject their own.

use std::fmt;

use crate::shader::ShaderKind;

/// A recoverable problem noticed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `register_shader` was called without a kind; the shader was filed as vertex.
    ShaderKindMissing { name: String },

    /// `register_shader` named a kind that does not exist; filed as vertex.
    ShaderKindInvalid { name: String, kind: String },

    /// The callable's stage differs from the kind it was filed under. The slot is
    /// taken, but typed lookups for it will come back empty.
    ShaderStageMismatch {
        name: String,
        kind: ShaderKind,
        stage: ShaderKind,
    },

    /// A draw call referenced shaders that are not registered; nothing was drawn.
    /// Each field holds the name that failed to resolve, if any.
    ShadersMissing {
        vertex: Option<String>,
        fragment: Option<String>,
    },

    /// The presenter rejected the frame.
    PresentFailed { reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ShaderKindMissing { name } => {
                write!(f, "shader kind not specified for shader '{name}'; defaulting to 'vertex'")
            }
            Diagnostic::ShaderKindInvalid { name, kind } => write!(
                f,
                "invalid shader kind '{kind}' for shader '{name}'; defaulting to 'vertex'"
            ),
            Diagnostic::ShaderStageMismatch { name, kind, stage } => write!(
                f,
                "shader '{name}' is a {stage} shader but was registered as {kind}; it will never be dispatched"
            ),
            Diagnostic::ShadersMissing { vertex, fragment } => {
                write!(f, "one or more shaders are missing for this object (")?;
                match (vertex, fragment) {
                    (Some(v), Some(fr)) => write!(f, "vertex '{v}', fragment '{fr}'")?,
                    (Some(v), None) => write!(f, "vertex '{v}'")?,
                    (None, Some(fr)) => write!(f, "fragment '{fr}'")?,
                    (None, None) => {}
                }
                write!(f, "); the object will not be rendered")
            }
            Diagnostic::PresentFailed { reason } => write!(f, "failed to present frame: {reason}"),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
///
/// Implemented for [`LogSink`] and for any `FnMut(&Diagnostic) + Send` closure.
pub trait DiagnosticSink: Send {
    fn warn(&mut self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `log::warn!`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic) + Send,
{
    fn warn(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}
