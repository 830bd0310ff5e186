use super::{Extent, RowCoverage};

/// Fills the gap between the extreme covered columns of every covered row.
///
/// One span per row: everything strictly between the leftmost and rightmost touched
/// column is plotted. Concave notches and holes get filled as well; callers that need
/// them preserved must split the polygon themselves.
///
/// Rows and columns are limited with the same tolerant bound as the line walk
/// ([`Extent::contains_inclusive`]).
pub fn fill_spans(coverage: &RowCoverage, extent: Extent, mut plot: impl FnMut(i64, i64)) {
    let Some((y_min, y_max)) = coverage.row_range() else {
        return;
    };

    for (y, span) in coverage.rows_between(y_min.max(0), y_max.min(extent.height)) {
        let Some(interior) = span.interior() else {
            continue;
        };

        let x_start = (*interior.start()).max(0);
        let x_end = (*interior.end()).min(extent.width);
        for x in x_start..=x_end {
            plot(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(cov: &RowCoverage, extent: Extent) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        fill_spans(cov, extent, |x, y| out.push((x, y)));
        out
    }

    #[test]
    fn empty_coverage_fills_nothing() {
        assert!(filled(&RowCoverage::new(), Extent::new(10, 10)).is_empty());
    }

    #[test]
    fn fills_strictly_between_extremes() {
        let mut cov = RowCoverage::new();
        cov.record(2, 3);
        cov.record(6, 3);
        assert_eq!(filled(&cov, Extent::new(10, 10)), vec![(3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn middle_columns_do_not_split_the_span() {
        let mut cov = RowCoverage::new();
        for x in [1, 4, 5] {
            cov.record(x, 0);
        }
        assert_eq!(filled(&cov, Extent::new(10, 10)), vec![(2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn rows_without_a_gap_are_skipped() {
        let mut cov = RowCoverage::new();
        cov.record(4, 0);
        cov.record(5, 0);
        cov.record(7, 1);
        assert!(filled(&cov, Extent::new(10, 10)).is_empty());
    }

    #[test]
    fn span_is_clipped_to_target_columns() {
        let mut cov = RowCoverage::new();
        cov.record(-5, 2);
        cov.record(20, 2);
        let out = filled(&cov, Extent::new(4, 4));
        assert_eq!(out, vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
    }

    #[test]
    fn rows_outside_target_are_skipped() {
        let mut cov = RowCoverage::new();
        cov.record(0, -1);
        cov.record(3, -1);
        cov.record(0, 9);
        cov.record(3, 9);
        assert!(filled(&cov, Extent::new(8, 8)).is_empty());
    }

    #[test]
    fn row_at_inclusive_height_is_plotted() {
        let mut cov = RowCoverage::new();
        cov.record(0, 4);
        cov.record(2, 4);
        assert_eq!(filled(&cov, Extent::new(4, 4)), vec![(1, 4)]);
    }
}
