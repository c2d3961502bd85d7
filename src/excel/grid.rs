//! Read access to one sheet: its extent and its rows of cell text

use crate::error::CompareResult;
use crate::excel::address::cell_address;
use crate::types::SheetDimension;

/// Forward-only sequence of rows. Dropping it releases whatever it borrows.
pub type RowIter<'a> = Box<dyn Iterator<Item = CompareResult<Vec<String>>> + 'a>;

/// A sheet the differ can walk
pub trait Grid {
    /// Opaque extent of the sheet
    fn dimension(&self) -> CompareResult<SheetDimension>;

    /// Rows from the top of the sheet, each holding cells from column A
    fn rows(&self) -> CompareResult<RowIter<'_>>;
}

/// Extent covering every used cell, e.g. `B2:D10`. An unused sheet is `A1`.
pub fn extent_of<I>(used: I) -> SheetDimension
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (row, col) in used {
        bounds = Some(match bounds {
            None => (row, col, row, col),
            Some((r0, c0, r1, c1)) => (r0.min(row), c0.min(col), r1.max(row), c1.max(col)),
        });
    }

    match bounds {
        None => SheetDimension::new("A1"),
        Some((r0, c0, r1, c1)) if (r0, c0) == (r1, c1) => {
            SheetDimension::new(cell_address(r0, c0))
        }
        Some((r0, c0, r1, c1)) => SheetDimension::new(format!(
            "{}:{}",
            cell_address(r0, c0),
            cell_address(r1, c1)
        )),
    }
}

/// Sheet held in memory, for callers that already have their data as text
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    rows: Vec<Vec<String>>,
    dimension: Option<SheetDimension>,
}

impl MemoryGrid {
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            dimension: None,
        }
    }

    /// Report `dimension` instead of the extent computed from the cells
    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(SheetDimension::new(dimension));
        self
    }
}

impl Grid for MemoryGrid {
    fn dimension(&self) -> CompareResult<SheetDimension> {
        if let Some(dimension) = &self.dimension {
            return Ok(dimension.clone());
        }
        Ok(extent_of(self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, value)| !value.is_empty())
                .map(move |(c, _)| (r, c))
        })))
    }

    fn rows(&self) -> CompareResult<RowIter<'_>> {
        Ok(Box::new(self.rows.iter().cloned().map(Ok)))
    }
}
