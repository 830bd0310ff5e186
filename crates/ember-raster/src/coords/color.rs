/// Straight-alpha RGBA color with channels nominally in `[0, 1]`.
///
/// This is what fragment shaders return. Channels are not clamped on construction;
/// the blender clamps after mixing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Replaces each non-finite channel with its default: `0` for RGB, `1` for alpha.
    #[inline]
    pub fn or_defaults(self) -> Self {
        fn channel(v: f32, default: f32) -> f32 {
            if v.is_finite() { v } else { default }
        }

        Self {
            r: channel(self.r, 0.0),
            g: channel(self.g, 0.0),
            b: channel(self.b, 0.0),
            a: channel(self.a, 1.0),
        }
    }
}

impl From<[f32; 4]> for ColorRgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_defaults_keeps_finite_channels() {
        let c = ColorRgba::new(0.25, 0.5, 0.75, 0.1);
        assert_eq!(c.or_defaults(), c);
    }

    #[test]
    fn or_defaults_fills_rgb_with_zero_and_alpha_with_one() {
        let c = ColorRgba::new(f32::NAN, f32::INFINITY, 0.5, f32::NAN).or_defaults();
        assert_eq!(c, ColorRgba::new(0.0, 0.0, 0.5, 1.0));
    }
}
