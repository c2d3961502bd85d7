//! Positional cell-by-cell comparison of two sheets

use crate::error::{CompareError, CompareResult};
use crate::excel::{Grid, Highlighter};
use crate::types::CellDiff;
use tracing::debug;

/// Compare sheet `a` with sheet `b` cell by cell.
///
/// The sheets must report the same dimension. Rows are walked in lockstep
/// from the top and the walk ends with the shorter sequence; paired rows must
/// hold the same number of cells. Values are compared as exact text.
///
/// Differences come back in row-major order. When a `highlighter` is given,
/// every differing cell is marked on it as its row is finished.
pub fn compare_sheets(
    a: &dyn Grid,
    b: &dyn Grid,
    mut highlighter: Option<&mut Highlighter>,
) -> CompareResult<Vec<CellDiff>> {
    let dim_a = a.dimension()?;
    let dim_b = b.dimension()?;
    debug!("Sheet dimensions: {} vs {}", dim_a, dim_b);

    if dim_a != dim_b {
        return Err(CompareError::DimensionMismatch {
            a: dim_a.to_string(),
            b: dim_b.to_string(),
        });
    }

    let rows_a = a.rows()?;
    let rows_b = b.rows()?;

    let mut diff = Vec::new();

    for (row, (cols_a, cols_b)) in rows_a.zip(rows_b).enumerate() {
        let cols_a = cols_a?;
        let cols_b = cols_b?;

        if cols_a.len() != cols_b.len() {
            return Err(CompareError::RowWidthMismatch {
                row,
                len_a: cols_a.len(),
                len_b: cols_b.len(),
            });
        }

        let row_start = diff.len();
        for (col, (val_a, val_b)) in cols_a.into_iter().zip(cols_b).enumerate() {
            if val_a != val_b {
                diff.push(CellDiff::new(row, col, val_a, val_b));
            }
        }

        if diff.len() > row_start {
            debug!("Row {}: {} differences", row + 1, diff.len() - row_start);

            if let Some(highlighter) = highlighter.as_deref_mut() {
                for cell in &diff[row_start..] {
                    highlighter.mark(cell.row(), cell.col())?;
                }
            }
        }
    }

    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::MemoryGrid;

    fn cells(diff: &[CellDiff]) -> Vec<(&str, usize, usize, &str, &str)> {
        diff.iter()
            .map(|d| (d.cell(), d.row(), d.col(), d.val_a(), d.val_b()))
            .collect()
    }

    #[test]
    fn test_identical_sheets() {
        let a = MemoryGrid::new(vec![vec!["1", "2"], vec!["3", "4"]]);
        let b = MemoryGrid::new(vec![vec!["1", "2"], vec!["3", "4"]]);

        let diff = compare_sheets(&a, &b, None).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_single_difference() {
        let a = MemoryGrid::new(vec![vec!["1", "2"], vec!["3", "4"]]);
        let b = MemoryGrid::new(vec![vec!["1", "9"], vec!["3", "4"]]);

        let diff = compare_sheets(&a, &b, None).unwrap();
        assert_eq!(cells(&diff), vec![("B1", 0, 1, "2", "9")]);
    }

    #[test]
    fn test_row_major_order() {
        let a = MemoryGrid::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
        let b = MemoryGrid::new(vec![vec!["a", "X", "Y"], vec!["Z", "e", "f"]]);

        let diff = compare_sheets(&a, &b, None).unwrap();
        assert_eq!(
            cells(&diff),
            vec![
                ("B1", 0, 1, "b", "X"),
                ("C1", 0, 2, "c", "Y"),
                ("A2", 1, 0, "d", "Z"),
            ]
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        let a = MemoryGrid::new(vec![vec!["abc", "x", "1"]]);
        let b = MemoryGrid::new(vec![vec!["ABC", "x ", "1.0"]]);

        let diff = compare_sheets(&a, &b, None).unwrap();
        assert_eq!(diff.len(), 3);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = MemoryGrid::new(vec![vec!["1", "2"]]);
        let b = MemoryGrid::new(vec![vec!["1", "2", "3"]]);

        let err = compare_sheets(&a, &b, None).unwrap_err();
        match err {
            CompareError::DimensionMismatch { a, b } => {
                assert_eq!(a, "A1:B1");
                assert_eq!(b, "A1:C1");
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_row_width_mismatch_discards_differences() {
        let a = MemoryGrid::new(vec![vec!["1", "2"], vec!["3", "4"]]).with_dimension("A1:B2");
        let b = MemoryGrid::new(vec![vec!["9", "2"], vec!["3"]]).with_dimension("A1:B2");

        let err = compare_sheets(&a, &b, None).unwrap_err();
        assert!(matches!(
            err,
            CompareError::RowWidthMismatch {
                row: 1,
                len_a: 2,
                len_b: 1
            }
        ));
    }

    #[test]
    fn test_extra_rows_are_ignored() {
        let a = MemoryGrid::new(vec![vec!["1"], vec!["2"], vec!["3"]]).with_dimension("A1:A3");
        let b = MemoryGrid::new(vec![vec!["1"]]).with_dimension("A1:A3");

        let diff = compare_sheets(&a, &b, None).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_row_errors_propagate() {
        struct Broken;

        impl Grid for Broken {
            fn dimension(&self) -> CompareResult<crate::types::SheetDimension> {
                Ok(crate::types::SheetDimension::new("A1"))
            }

            fn rows(&self) -> CompareResult<crate::excel::RowIter<'_>> {
                Ok(Box::new(std::iter::once(Err(CompareError::SheetRead {
                    sheet: "Sheet1".to_string(),
                    message: "truncated".to_string(),
                }))))
            }
        }

        let a = MemoryGrid::new(vec![vec!["1"]]);
        let err = compare_sheets(&a, &Broken, None).unwrap_err();
        assert!(matches!(err, CompareError::SheetRead { .. }));
    }

    #[test]
    fn test_highlighter_marks_differences() {
        let a = MemoryGrid::new(vec![vec!["1", "2"], vec!["3", "4"]]);
        let b = MemoryGrid::new(vec![vec!["1", "9"], vec!["0", "4"]]);
        let mut highlighter = Highlighter::new(0xE0EBF5);

        let diff = compare_sheets(&a, &b, Some(&mut highlighter)).unwrap();
        assert_eq!(diff.len(), 2);
        assert_eq!(highlighter.len(), 2);
    }

    #[test]
    fn test_highlighter_untouched_when_identical() {
        let a = MemoryGrid::new(vec![vec!["1", "2"]]);
        let b = MemoryGrid::new(vec![vec!["1", "2"]]);
        let mut highlighter = Highlighter::new(0xE0EBF5);

        compare_sheets(&a, &b, Some(&mut highlighter)).unwrap();
        assert!(highlighter.is_empty());
    }
}
