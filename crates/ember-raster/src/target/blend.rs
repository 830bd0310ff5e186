use crate::coords::ColorRgba;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Mixes one 8-bit channel toward `incoming` (in `[0, 1]`) by `alpha`.
///
/// The result is truncated, then clamped to `0..=255`.
#[inline]
pub fn blend_channel(existing: u8, incoming: f32, alpha: f32) -> u8 {
    let mixed = lerp(f32::from(existing) / 255.0, incoming, alpha) * 255.0;
    mixed.trunc().clamp(0.0, 255.0) as u8
}

/// Blends `color` over an RGBA pixel.
///
/// Non-finite channels take their defaults first (`0` for RGB, `1` for alpha). The
/// destination alpha is always written as opaque.
#[inline]
pub fn blend_over(dst: [u8; 4], color: ColorRgba) -> [u8; 4] {
    let c = color.or_defaults();
    [
        blend_channel(dst[0], c.r, c.a),
        blend_channel(dst[1], c.g, c.a),
        blend_channel(dst[2], c.b, c.a),
        255,
    ]
}
