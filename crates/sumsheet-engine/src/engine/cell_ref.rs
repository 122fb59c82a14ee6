//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! (e.g., "A1", "B12") and zero-indexed row/column coordinates. Columns are a
//! single uppercase letter, so a grid is at most [`MAX_COLS`] wide, and at
//! most [`MAX_ROWS`] tall so a reference chain through every cell stays
//! within the evaluator's recursion depth.
//!
//! # Examples
//!
//! ```
//! use sumsheet_engine::engine::{CellRef, Dimensions};
//!
//! let dims = Dimensions::new(10, 26).unwrap();
//! let cell = CellRef::parse("B3", dims).unwrap();
//! assert_eq!(cell.row, 2);  // 0-indexed
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::error::ReferenceError;

/// Widest grid a single-letter column can address.
pub const MAX_COLS: usize = 26;

/// Tallest grid accepted by [`Dimensions::new`].
pub const MAX_ROWS: usize = 256;

static A1_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<letter>[A-Z])(?<numbers>[0-9]+)$").expect("cell reference pattern compiles")
});

/// Size of a grid, validated on construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Returns `None` unless there are `1..=MAX_ROWS` rows and `1..=MAX_COLS` columns.
    pub fn new(rows: usize, cols: usize) -> Option<Dimensions> {
        if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_COLS).contains(&cols) {
            return None;
        }
        rows.checked_mul(cols)?;
        Some(Dimensions { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        // Bounded by MAX_ROWS * MAX_COLS in `new`.
        self.rows.saturating_mul(self.cols)
    }
}

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a reference such as "A1" and check it against the grid size.
    ///
    /// Lowercase letters, multi-letter columns, signs and whitespace are all
    /// rejected. Leading zeros in the row are accepted ("A01" is A1).
    pub fn parse(name: &str, dims: Dimensions) -> Result<CellRef, ReferenceError> {
        let caps = A1_PATTERN
            .captures(name)
            .ok_or_else(|| ReferenceError::Malformed(name.to_string()))?;

        let col = (caps["letter"].as_bytes()[0] - b'A') as usize;
        let row = caps["numbers"]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| ReferenceError::OutOfRange(name.to_string()))?;

        let cell = CellRef::new(row, col);
        if !dims.contains(&cell) {
            return Err(ReferenceError::OutOfRange(name.to_string()));
        }
        Ok(cell)
    }

    /// Convert a column index to its letter (0 -> A, 25 -> Z).
    ///
    /// Only meaningful below [`MAX_COLS`]; larger indices wrap.
    pub fn col_to_letter(col: usize) -> char {
        (b'A' + (col % MAX_COLS) as u8) as char
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letter(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions::new(20, 26).unwrap()
    }

    #[test]
    fn test_row_zero_is_out_of_range() {
        assert_eq!(
            CellRef::parse("A0", dims()),
            Err(ReferenceError::OutOfRange("A0".to_string()))
        );
    }

    #[test]
    fn test_huge_row_does_not_overflow() {
        let huge = format!("A{}", "9".repeat(40));
        assert!(matches!(
            CellRef::parse(&huge, dims()),
            Err(ReferenceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_column_outside_narrow_grid() {
        let narrow = Dimensions::new(5, 3).unwrap();
        assert!(CellRef::parse("C1", narrow).is_ok());
        assert_eq!(
            CellRef::parse("D1", narrow),
            Err(ReferenceError::OutOfRange("D1".to_string()))
        );
    }

    #[test]
    fn test_dimensions_rejects_wide_or_empty() {
        assert!(Dimensions::new(0, 5).is_none());
        assert!(Dimensions::new(5, 0).is_none());
        assert!(Dimensions::new(5, 27).is_none());
        assert_eq!(Dimensions::new(5, 26).map(|d| d.area()), Some(130));
    }

    #[test]
    fn test_dimensions_rejects_tall_grids() {
        assert!(Dimensions::new(MAX_ROWS + 1, 26).is_none());
        assert!(Dimensions::new(usize::MAX, 26).is_none());
        assert!(Dimensions::new(9_000_000_000_000_000_000, 1).is_none());
        let tallest = Dimensions::new(MAX_ROWS, MAX_COLS).unwrap();
        assert_eq!(tallest.rows(), MAX_ROWS);
        assert_eq!(tallest.area(), MAX_ROWS * MAX_COLS);
    }
}
