use core::ops::Index;

use super::{Vec2, Vec3, Vec4};

/// Model-space vertex position handed to a vertex shader.
///
/// Draw calls accept 2, 3 or 4 component positions; the shader decides what the
/// extra components mean.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Position {
    Xy(Vec2),
    Xyz(Vec3),
    Xyzw(Vec4),
}

impl Position {
    /// Number of components (2, 3 or 4).
    #[inline]
    pub fn component_count(&self) -> usize {
        match self {
            Position::Xy(_) => 2,
            Position::Xyz(_) => 3,
            Position::Xyzw(_) => 4,
        }
    }

    /// Components in order, `x` first.
    pub fn components(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.component_count()).map(|i| self[i])
    }

    /// False when any present component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.components().all(f32::is_finite)
    }

    /// Widens to four components, filling `z = 0` and `w = 1`.
    #[inline]
    pub fn to_vec4(&self) -> Vec4 {
        match *self {
            Position::Xy(v) => Vec4::new(v.x, v.y, 0.0, 1.0),
            Position::Xyz(v) => Vec4::new(v.x, v.y, v.z, 1.0),
            Position::Xyzw(v) => v,
        }
    }
}

impl Index<usize> for Position {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match self {
            Position::Xy(v) => &v[i],
            Position::Xyz(v) => &v[i],
            Position::Xyzw(v) => &v[i],
        }
    }
}

impl From<Vec2> for Position {
    #[inline]
    fn from(v: Vec2) -> Self {
        Position::Xy(v)
    }
}

impl From<Vec3> for Position {
    #[inline]
    fn from(v: Vec3) -> Self {
        Position::Xyz(v)
    }
}

impl From<Vec4> for Position {
    #[inline]
    fn from(v: Vec4) -> Self {
        Position::Xyzw(v)
    }
}

impl From<[f32; 2]> for Position {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Position::Xy(a.into())
    }
}

impl From<[f32; 3]> for Position {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Position::Xyz(a.into())
    }
}

impl From<[f32; 4]> for Position {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Position::Xyzw(a.into())
    }
}
