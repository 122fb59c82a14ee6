//! Display buffer for the command front-end.
//!
//! The document only reports display strings when cells change; the screen
//! keeps the latest string per cell so it can be shown again or printed as a
//! table.

use sumsheet_core::DisplayUpdate;
use sumsheet_engine::engine::{CellRef, Dimensions};

/// Width of the row-number gutter in printed tables.
const GUTTER: usize = 4;

pub struct Screen {
    dims: Dimensions,
    width: usize,
    cells: Vec<String>,
}

impl Screen {
    pub fn new(dims: Dimensions, width: usize) -> Self {
        Screen {
            dims,
            width,
            cells: vec![String::new(); dims.area()],
        }
    }

    fn index(&self, cell: &CellRef) -> Option<usize> {
        self.dims
            .contains(cell)
            .then(|| cell.row * self.dims.cols() + cell.col)
    }

    pub fn apply(&mut self, updates: &[DisplayUpdate]) {
        for update in updates {
            if let Some(i) = self.index(&update.cell) {
                self.cells[i] = update.text.clone();
            }
        }
    }

    pub fn display(&self, cell: &CellRef) -> &str {
        self.index(cell).map_or("", |i| self.cells[i].as_str())
    }

    /// Render rows up to the last one with any visible content.
    pub fn render(&self) -> String {
        let cols = self.dims.cols();
        let last_row = (0..self.dims.rows())
            .rev()
            .find(|&row| (0..cols).any(|col| !self.display(&CellRef::new(row, col)).is_empty()));

        let mut out = String::new();
        let mut header = format!("{:width$}", "", width = GUTTER);
        for col in 0..cols {
            header.push(' ');
            header.push_str(&self.fit(&CellRef::col_to_letter(col).to_string()));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        if let Some(last_row) = last_row {
            for row in 0..=last_row {
                let mut line = format!("{:>width$}", row + 1, width = GUTTER);
                for col in 0..cols {
                    line.push(' ');
                    line.push_str(&self.fit(self.display(&CellRef::new(row, col))));
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        out
    }

    /// Pad or cut text to exactly one cell width.
    fn fit(&self, text: &str) -> String {
        let cut: String = text.chars().take(self.width).collect();
        format!("{:<width$}", cut, width = self.width)
    }
}
