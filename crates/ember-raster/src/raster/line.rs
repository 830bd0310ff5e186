use crate::coords::Vec2;

use super::{Extent, RowCoverage};

/// Walks the integer Bresenham path from `from` to `to`.
///
/// Endpoints are truncated toward zero. Every visited pixel is recorded in `coverage`;
/// pixels passing [`Extent::contains_inclusive`] are also handed to `plot`. Identical
/// endpoints visit exactly one pixel.
///
/// The walk is not clipped: its cost is one step per pixel of the longer axis, up to
/// about 2^31 steps for saturated endpoints. A vertex at clip `x = 1e6` on a 64x64
/// target walks tens of millions of pixels, roughly a second.
pub fn rasterize_line(
    from: Vec2,
    to: Vec2,
    extent: Extent,
    coverage: &mut RowCoverage,
    mut plot: impl FnMut(i64, i64),
) {
    let (mut x0, mut y0) = (to_pixel(from.x), to_pixel(from.y));
    let (x1, y1) = (to_pixel(to.x), to_pixel(to.y));

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        if extent.contains_inclusive(x0, y0) {
            plot(x0, y0);
        }
        coverage.record(x0, y0);

        let e2 = 2 * error;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            error += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            error += dx;
            y0 += sy;
        }
    }
}

/// Truncates toward zero. Saturates at the `i32` range so the walk arithmetic in
/// `i64` cannot overflow.
#[inline]
fn to_pixel(v: f32) -> i64 {
    i64::from(v as i32)
}
