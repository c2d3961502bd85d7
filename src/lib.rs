//! excel-compare - cell-by-cell comparison of spreadsheet files
//!
//! This library compares one sheet of two spreadsheet documents position by
//! position and reports every cell whose text differs. Optionally, a copy of
//! the second document is written with the differing cells filled.
//!
//! # Features
//!
//! - Strict positional comparison of cell text (no type coercion)
//! - Dimension and row-width checks before cells are compared
//! - .xlsx, .xlsm, .xls and .ods inputs
//! - Highlighted `.diff.xlsx` copy of the right-hand file
//!
//! # Example
//!
//! ```no_run
//! use excel_compare::core::compare_files;
//! use excel_compare::types::CompareConfig;
//! use std::path::Path;
//!
//! let config = CompareConfig::default();
//! let result = compare_files(
//!     Path::new("a.xlsx"),
//!     Path::new("b.xlsx"),
//!     &config.sheet,
//!     &config.sheet,
//!     &config,
//! )?;
//!
//! for diff in &result.differences {
//!     println!("{}", diff);
//! }
//! # Ok::<(), excel_compare::error::CompareError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{CompareError, CompareResult};
pub use types::{CellDiff, CompareConfig, ComparisonReport, SheetDimension};
