//! Highlighter - fills the differing cells of the B document and saves it
//! under a new name. Everything else in the document is left as read.

use crate::error::{CompareError, CompareResult};
use std::path::Path;
use tracing::debug;
use umya_spreadsheet::{reader, writer};

const MAX_ROW: usize = 1_048_575;
const MAX_COL: usize = 16_383;

/// Collects the cells to fill and writes the annotated document
pub struct Highlighter {
    color: u32,
    marks: Vec<(u32, u32)>,
}

impl Highlighter {
    /// Create a highlighter filling with `color` (0xRRGGBB)
    pub fn new(color: u32) -> Self {
        Self {
            color,
            marks: Vec::new(),
        }
    }

    /// Fill the cell at zero-based `(row, col)` of the compared sheet
    pub fn mark(&mut self, row: usize, col: usize) -> CompareResult<()> {
        if row > MAX_ROW || col > MAX_COL {
            return Err(CompareError::Style(format!(
                "cell ({}, {}) is outside the worksheet limits",
                row, col
            )));
        }
        self.marks.push((row as u32, col as u32));
        Ok(())
    }

    /// Number of cells marked so far
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Fill color as the ARGB hex string stored in the styles part
    pub fn argb(&self) -> String {
        format!("FF{:06X}", self.color)
    }

    /// Open `source`, apply a solid fill to the marked cells of `sheet` and
    /// save the result to `output`. `source` itself is not modified.
    pub fn save_as(&self, source: &Path, sheet: &str, output: &Path) -> CompareResult<()> {
        let mut book = reader::xlsx::read(source).map_err(|e| CompareError::DocumentOpen {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let worksheet = book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| CompareError::SheetRead {
                sheet: sheet.to_string(),
                message: format!("not found in {}", source.display()),
            })?;

        let argb = self.argb();
        for &(row, col) in &self.marks {
            // (col, row), one-based
            worksheet
                .get_style_mut((col + 1, row + 1))
                .set_background_color(argb.as_str());
        }

        debug!(
            "Writing {} highlighted cells to {}",
            self.marks.len(),
            output.display()
        );

        writer::xlsx::write(&book, output).map_err(|e| CompareError::Save {
            path: output.to_path_buf(),
            message: e.to_string(),
        })
    }
}
