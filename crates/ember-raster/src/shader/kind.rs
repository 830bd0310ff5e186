use std::fmt;
use std::str::FromStr;

/// Registry partition a shader is filed under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a kind name other than `vertex` or `fragment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownShaderKind(pub String);

impl fmt::Display for UnknownShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shader kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownShaderKind {}

impl FromStr for ShaderKind {
    type Err = UnknownShaderKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertex" => Ok(ShaderKind::Vertex),
            "fragment" => Ok(ShaderKind::Fragment),
            other => Err(UnknownShaderKind(other.to_string())),
        }
    }
}

/// Registration options.
///
/// `kind` is a name rather than a [`ShaderKind`] so hosts can pass through whatever
/// they were given; a missing or unknown name falls back to `vertex` with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderOptions {
    pub kind: Option<String>,
}

impl ShaderOptions {
    pub fn vertex() -> Self {
        Self::kind(ShaderKind::Vertex.as_str())
    }

    pub fn fragment() -> Self {
        Self::kind(ShaderKind::Fragment.as_str())
    }

    pub fn kind(name: impl Into<String>) -> Self {
        Self { kind: Some(name.into()) }
    }
}
