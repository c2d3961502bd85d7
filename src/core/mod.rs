//! Comparison engine: sheet differ and file-pair comparator

pub mod comparator;
pub mod differ;

pub use comparator::{compare_files, diff_output_path, FileComparison};
pub use differ::compare_sheets;
