use crate::error::{CompareError, CompareResult};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Sheet compared when none is given
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Fill color applied to differing cells when none is given
pub const DEFAULT_COLOR: &str = "E0EBF5";

//==============================================================================
// Cell Differences
//==============================================================================

/// One cell where the left (A) and right (B) sheets disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDiff {
    cell: String,
    row: usize,
    col: usize,
    val_a: String,
    val_b: String,
}

impl CellDiff {
    pub(crate) fn new(row: usize, col: usize, val_a: String, val_b: String) -> Self {
        Self {
            cell: crate::excel::cell_address(row, col),
            row,
            col,
            val_a,
            val_b,
        }
    }

    /// A1-style address of the cell
    pub fn cell(&self) -> &str {
        &self.cell
    }

    /// Zero-based row index
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index
    pub fn col(&self) -> usize {
        self.col
    }

    /// Value in the left sheet
    pub fn val_a(&self) -> &str {
        &self.val_a
    }

    /// Value in the right sheet
    pub fn val_b(&self) -> &str {
        &self.val_b
    }
}

impl fmt::Display for CellDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): '{}' != '{}'",
            self.cell, self.row, self.col, self.val_a, self.val_b
        )
    }
}

//==============================================================================
// Sheet Dimension
//==============================================================================

/// Opaque extent of a sheet, e.g. `A1:D10`. Only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDimension(String);

impl SheetDimension {
    pub fn new(range: impl Into<String>) -> Self {
        Self(range.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//==============================================================================
// Configuration
//==============================================================================

/// Behavior flags for a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Sheet compared on both sides
    pub sheet: String,
    /// Print every difference instead of a count
    pub print_diff: bool,
    /// Save a copy of the B document with the differing cells filled
    pub color_sheet: bool,
    /// Fill color as six hex digits (RRGGBB)
    pub color: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            print_diff: false,
            color_sheet: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl CompareConfig {
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    pub fn with_print_diff(mut self, print_diff: bool) -> Self {
        self.print_diff = print_diff;
        self
    }

    pub fn with_color_sheet(mut self, color_sheet: bool) -> Self {
        self.color_sheet = color_sheet;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Check the configuration before any document is touched
    pub fn validate(&self) -> CompareResult<()> {
        if self.sheet.trim().is_empty() {
            return Err(CompareError::Configuration(
                "Sheet name must not be empty".to_string(),
            ));
        }
        self.color_rgb()?;
        Ok(())
    }

    /// Fill color as a 0xRRGGBB value. A leading `#` is accepted.
    pub fn color_rgb(&self) -> CompareResult<u32> {
        let hex = self.color.strip_prefix('#').unwrap_or(&self.color);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CompareError::Configuration(format!(
                "Invalid color '{}': expected six hex digits like {}",
                self.color, DEFAULT_COLOR
            )));
        }
        u32::from_str_radix(hex, 16).map_err(|e| {
            CompareError::Configuration(format!("Invalid color '{}': {}", self.color, e))
        })
    }
}

//==============================================================================
// Reports
//==============================================================================

/// Outcome of one file-pair comparison, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub sheet: String,
    pub differences: Vec<CellDiff>,
    /// Annotated copy of the B document, when one was written
    pub annotated: Option<PathBuf>,
}

impl ComparisonReport {
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }
}
