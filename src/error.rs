use std::path::PathBuf;
use thiserror::Error;

pub type CompareResult<T> = Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid file pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Unable to read matched path: {0}")]
    GlobMatch(#[from] glob::GlobError),

    #[error("Unable to open {}: {message}", path.display())]
    DocumentOpen { path: PathBuf, message: String },

    #[error("Unable to read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    #[error("Dimensions don't match: {a} vs {b}")]
    DimensionMismatch { a: String, b: String },

    #[error("Found row size that doesn't match at row {}: {len_a} vs {len_b} cells", row + 1)]
    RowWidthMismatch {
        row: usize,
        len_a: usize,
        len_b: usize,
    },

    #[error("Unable to highlight cells: {0}")]
    Style(String),

    #[error("Unable to save {}: {message}", path.display())]
    Save { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompareError {
    /// True for the two errors raised by the sheet walk itself, as opposed to
    /// errors surfaced by the document layer.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            CompareError::DimensionMismatch { .. } | CompareError::RowWidthMismatch { .. }
        )
    }
}
