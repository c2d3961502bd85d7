//! Spreadsheet access for comparisons
//!
//! - Loading: spreadsheet files → sheets walked row by row (calamine)
//! - Highlighting: differing cells filled in a copy of the right-hand .xlsx (umya-spreadsheet)

mod address;
mod grid;
mod highlighter;
mod loader;

pub use address::{cell_address, column_letter};
pub use grid::{extent_of, Grid, MemoryGrid, RowIter};
pub use highlighter::Highlighter;
pub use loader::{cell_text, SheetGrid, Workbook};
