use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Leftmost and rightmost column touched on one row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub min: i64,
    pub max: i64,
}

impl Span {
    #[inline]
    pub const fn point(x: i64) -> Self {
        Self { min: x, max: x }
    }

    #[inline]
    pub fn include(&mut self, x: i64) {
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Columns strictly between `min` and `max`, or `None` when there is no gap.
    #[inline]
    pub fn interior(self) -> Option<RangeInclusive<i64>> {
        (self.min + 1 < self.max).then(|| (self.min + 1)..=(self.max - 1))
    }
}

/// Per-row column extremes recorded while edges are rasterized.
///
/// Lives for a single polygon draw call. Only the extremes of each row are kept,
/// since the fill reads nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCoverage {
    rows: BTreeMap<i64, Span>,
}

impl RowCoverage {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `(x, y)` as touched. Coordinates outside the target are recorded too.
    pub fn record(&mut self, x: i64, y: i64) {
        self.rows
            .entry(y)
            .and_modify(|span| span.include(x))
            .or_insert_with(|| Span::point(x));
    }

    #[inline]
    pub fn span(&self, y: i64) -> Option<Span> {
        self.rows.get(&y).copied()
    }

    /// Lowest and highest touched rows.
    pub fn row_range(&self) -> Option<(i64, i64)> {
        let (&lo, _) = self.rows.first_key_value()?;
        let (&hi, _) = self.rows.last_key_value()?;
        Some((lo, hi))
    }

    /// Touched rows within `lo..=hi`, ascending.
    pub fn rows_between(&self, lo: i64, hi: i64) -> impl Iterator<Item = (i64, Span)> + '_ {
        // BTreeMap::range panics on an inverted range.
        (lo <= hi)
            .then(|| self.rows.range(lo..=hi))
            .into_iter()
            .flatten()
            .map(|(&y, &span)| (y, span))
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
