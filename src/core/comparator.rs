//! File-pair comparison: open both documents, diff one sheet, annotate B

use crate::core::differ::compare_sheets;
use crate::error::{CompareError, CompareResult};
use crate::excel::{Highlighter, Workbook};
use crate::types::{CellDiff, CompareConfig};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of comparing one pair of files
#[derive(Debug, Clone)]
pub struct FileComparison {
    pub differences: Vec<CellDiff>,
    /// Annotated copy of B, written when highlighting found differences
    pub annotated: Option<PathBuf>,
}

/// Compare `sheet_a` of `path_a` with `sheet_b` of `path_b`.
///
/// With `config.color_sheet` set and at least one difference, a copy of the
/// B document with the differing cells filled is saved next to it as
/// `<name>.diff.xlsx`.
pub fn compare_files(
    path_a: &Path,
    path_b: &Path,
    sheet_a: &str,
    sheet_b: &str,
    config: &CompareConfig,
) -> CompareResult<FileComparison> {
    let (mut highlighter, output) = if config.color_sheet {
        (
            Some(Highlighter::new(config.color_rgb()?)),
            Some(diff_output_path(path_b)?),
        )
    } else {
        (None, None)
    };

    let mut workbook_a = Workbook::open(path_a)?;
    let mut workbook_b = Workbook::open(path_b)?;
    let grid_a = workbook_a.sheet(sheet_a)?;
    let grid_b = workbook_b.sheet(sheet_b)?;

    let differences = compare_sheets(&grid_a, &grid_b, highlighter.as_mut())
        .inspect_err(|e| {
            if e.is_shape_mismatch() {
                warn!(
                    "{} and {} cannot be compared cell by cell: {}",
                    path_a.display(),
                    path_b.display(),
                    e
                );
            }
        })?;

    info!(
        "Compared {} [{}] with {} [{}]: {} differences",
        path_a.display(),
        sheet_a,
        path_b.display(),
        sheet_b,
        differences.len()
    );

    let annotated = match (highlighter, output) {
        (Some(highlighter), Some(output)) if !differences.is_empty() => {
            highlighter.save_as(path_b, sheet_b, &output)?;
            info!("Saved highlighted copy to {}", output.display());
            Some(output)
        }
        _ => None,
    };

    Ok(FileComparison {
        differences,
        annotated,
    })
}

/// Path of the annotated copy of `path`: `dir/name.xlsx` → `dir/name.diff.xlsx`.
///
/// Only `.xlsx` files can be annotated; anything else is refused so the
/// input file is never overwritten.
pub fn diff_output_path(path: &Path) -> CompareResult<PathBuf> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .ok_or_else(|| {
            CompareError::Configuration(format!(
                "Cannot highlight {}: only .xlsx files can be colored",
                path.display()
            ))
        })?;

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            CompareError::Configuration(format!("Invalid file name: {}", path.display()))
        })?;

    Ok(path.with_file_name(format!("{}.diff.{}", stem, extension)))
}
