//! A1-style cell addresses from zero-based coordinates

/// Convert a zero-based column index to spreadsheet column letters
///
/// Examples:
/// - 0 → A
/// - 25 → Z
/// - 26 → AA
/// - 16383 → XFD
pub fn column_letter(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// Address of the cell at zero-based `(row, col)`, e.g. `(4, 2)` → `C5`
pub fn cell_address(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}
