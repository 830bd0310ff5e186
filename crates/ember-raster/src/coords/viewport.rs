use super::{Vec2, Vec4};

/// Size of the render target in pixels.
///
/// Basis for mapping clip-space positions to screen space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// Maps a clip-space position to screen pixels.
    ///
    /// Clip `+Y` is up while screen `+Y` is down, so `y` is flipped. Positions outside
    /// `[-1, 1]²` map outside the target; nothing is clamped here.
    #[inline]
    pub fn clip_to_screen(self, clip: Vec4) -> Vec2 {
        Vec2::new(
            (clip.x * 0.5 + 0.5) * self.width,
            (-clip.y * 0.5 + 0.5) * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(x: f32, y: f32) -> Vec4 { Vec4::new(x, y, 0.0, 1.0) }

    #[test]
    fn origin_maps_to_center() {
        let vp = Viewport::from_size(10, 8);
        assert_eq!(vp.clip_to_screen(clip(0.0, 0.0)), Vec2::new(5.0, 4.0));
    }

    #[test]
    fn clip_top_left_maps_to_screen_origin() {
        let vp = Viewport::from_size(10, 8);
        assert_eq!(vp.clip_to_screen(clip(-1.0, 1.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn clip_bottom_right_maps_to_far_corner() {
        let vp = Viewport::from_size(10, 8);
        assert_eq!(vp.clip_to_screen(clip(1.0, -1.0)), Vec2::new(10.0, 8.0));
    }

    #[test]
    fn outside_clip_square_is_not_clamped() {
        let vp = Viewport::from_size(10, 10);
        assert_eq!(vp.clip_to_screen(clip(3.0, 0.0)).x, 20.0);
    }
}
