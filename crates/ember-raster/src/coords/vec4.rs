use core::ops::Index;

/// 4-component float vector.
///
/// Vertex shaders output clip positions as `Vec4`; only `x` and `y` take part in the
/// screen mapping, `z` and `w` are carried through untouched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// True when `x` and `y` both lie in the unit clip square `[-1, 1]`.
    #[inline]
    pub fn in_clip_square(self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_square_is_inclusive() {
        assert!(Vec4::new(1.0, -1.0, 0.0, 1.0).in_clip_square());
        assert!(Vec4::new(0.0, 0.0, 5.0, -3.0).in_clip_square());
    }

    #[test]
    fn clip_square_rejects_either_axis() {
        assert!(!Vec4::new(1.01, 0.0, 0.0, 1.0).in_clip_square());
        assert!(!Vec4::new(0.0, -1.5, 0.0, 1.0).in_clip_square());
    }

    #[test]
    fn clip_square_rejects_nan() {
        assert!(!Vec4::new(f32::NAN, 0.0, 0.0, 1.0).in_clip_square());
    }

    #[test]
    fn index_matches_fields() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([v[0], v[1], v[2], v[3]], [v.x, v.y, v.z, v.w]);
    }
}
