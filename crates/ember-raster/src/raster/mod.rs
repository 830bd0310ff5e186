//! Rasterization stages.
//!
//! Convention:
//! - pixel coordinates are `i64` so endpoints far outside the target walk safely
//! - stages never touch the pixel buffer directly; they hand `(x, y)` to a plot
//!   callback, and the buffer's write path does the final bounds check

mod coverage;
mod fill;
mod line;
mod pipeline;

pub use coverage::{RowCoverage, Span};
pub use fill::fill_spans;
pub use line::rasterize_line;
pub use pipeline::{ProjectedVertex, project, project_segment};

/// Target size as seen by the rasterizer.
///
/// The rasterizer's own bounds test is deliberately tolerant: it accepts one column
/// and one row past the last valid pixel. The write path rejects those.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: i64,
    pub height: i64,
}

impl Extent {
    #[inline]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// `0 <= x <= width && 0 <= y <= height`.
    #[inline]
    pub fn contains_inclusive(self, x: i64, y: i64) -> bool {
        x >= 0 && x <= self.width && y >= 0 && y <= self.height
    }
}
