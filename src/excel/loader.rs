//! Spreadsheet loading - files on disk → sheets the differ can walk

use crate::error::{CompareError, CompareResult};
use crate::excel::grid::{extent_of, Grid, RowIter};
use crate::types::SheetDimension;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// An opened spreadsheet document (.xlsx, .xlsm, .xls, .ods)
pub struct Workbook {
    inner: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a spreadsheet file
    pub fn open<P: AsRef<Path>>(path: P) -> CompareResult<Self> {
        let inner = open_workbook_auto(&path).map_err(|e| CompareError::DocumentOpen {
            path: path.as_ref().to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self { inner })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// Load a sheet by name
    pub fn sheet(&mut self, name: &str) -> CompareResult<SheetGrid> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| CompareError::SheetRead {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(SheetGrid {
            name: name.to_string(),
            range,
        })
    }

    /// Formula text of a sheet, if the format carries any
    pub fn formulas(&mut self, name: &str) -> Option<Range<String>> {
        self.inner.worksheet_formula(name).ok()
    }
}

/// A loaded sheet
pub struct SheetGrid {
    name: String,
    range: Range<Data>,
}

impl SheetGrid {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cells of row `row` from column A through the last non-empty cell
    fn row_text(&self, row: u32) -> Vec<String> {
        let (Some((first_row, first_col)), Some((_, last_col))) =
            (self.range.start(), self.range.end())
        else {
            return Vec::new();
        };
        if row < first_row {
            return Vec::new();
        }

        let last_used = (first_col..=last_col).rev().find(|&col| {
            !matches!(self.range.get_value((row, col)), None | Some(Data::Empty))
        });

        match last_used {
            Some(last) => (0..=last)
                .map(|col| {
                    self.range
                        .get_value((row, col))
                        .map(cell_text)
                        .unwrap_or_default()
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Grid for SheetGrid {
    fn dimension(&self) -> CompareResult<SheetDimension> {
        let (row_offset, col_offset) = self.range.start().unwrap_or((0, 0));
        Ok(extent_of(self.range.used_cells().map(|(row, col, _)| {
            (row + row_offset as usize, col + col_offset as usize)
        })))
    }

    fn rows(&self) -> CompareResult<RowIter<'_>> {
        let row_count = self.range.end().map(|(last, _)| last + 1).unwrap_or(0);
        Ok(Box::new((0..row_count).map(move |row| Ok(self.row_text(row)))))
    }
}

/// Text of a cell as the comparison sees it
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
