use std::collections::HashMap;

use crate::diagnostics::{Diagnostic, DiagnosticSink};

use super::{FragmentShader, Shader, ShaderKind, ShaderOptions, VertexShader};

/// Append-only store of named shaders, partitioned by kind.
///
/// Invariants:
/// - a name is unique within its kind
/// - the first registration under a `(kind, name)` wins; later ones are ignored
/// - there is no removal
#[derive(Debug, Default)]
pub struct ShaderRegistry {
    vertex: HashMap<String, Shader>,
    fragment: HashMap<String, Shader>,
}

impl ShaderRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `shader` under `name` and the kind named by `options`.
    ///
    /// A missing or unknown kind is reported to `sink` and treated as `vertex`.
    /// Returns `true` when the shader was stored, `false` when the slot was taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        shader: Shader,
        options: &ShaderOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let name = name.into();
        let kind = resolve_kind(&name, options, sink);

        let table = self.table_mut(kind);
        if table.contains_key(&name) {
            return false;
        }

        let stage = shader.stage();
        if stage != kind {
            sink.warn(&Diagnostic::ShaderStageMismatch {
                name: name.clone(),
                kind,
                stage,
            });
        }

        log::debug!("registered {kind} shader '{name}'");
        table.insert(name, shader);
        true
    }

    /// Raw lookup; whatever occupies the slot, regardless of its stage.
    #[inline]
    pub fn lookup(&self, kind: ShaderKind, name: &str) -> Option<&Shader> {
        self.table(kind).get(name)
    }

    /// Vertex shader registered under `name`, if it is one.
    pub fn vertex_shader(&self, name: &str) -> Option<VertexShader> {
        self.lookup(ShaderKind::Vertex, name)
            .and_then(Shader::as_vertex)
            .cloned()
    }

    /// Fragment shader registered under `name`, if it is one.
    pub fn fragment_shader(&self, name: &str) -> Option<FragmentShader> {
        self.lookup(ShaderKind::Fragment, name)
            .and_then(Shader::as_fragment)
            .cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertex.len() + self.fragment.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, kind: ShaderKind) -> &HashMap<String, Shader> {
        match kind {
            ShaderKind::Vertex => &self.vertex,
            ShaderKind::Fragment => &self.fragment,
        }
    }

    fn table_mut(&mut self, kind: ShaderKind) -> &mut HashMap<String, Shader> {
        match kind {
            ShaderKind::Vertex => &mut self.vertex,
            ShaderKind::Fragment => &mut self.fragment,
        }
    }
}

fn resolve_kind(name: &str, options: &ShaderOptions, sink: &mut dyn DiagnosticSink) -> ShaderKind {
    let Some(kind) = options.kind.as_deref() else {
        sink.warn(&Diagnostic::ShaderKindMissing { name: name.to_string() });
        return ShaderKind::Vertex;
    };

    kind.parse().unwrap_or_else(|_| {
        sink.warn(&Diagnostic::ShaderKindInvalid {
            name: name.to_string(),
            kind: kind.to_string(),
        });
        ShaderKind::Vertex
    })
}
