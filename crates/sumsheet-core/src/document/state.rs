use crate::config::SheetConfig;
use crate::error::{Result, SheetError};
use sumsheet_engine::engine::{Cell, CellRef, Grid};

/// New display text for one cell, produced by an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub cell: CellRef,
    pub text: String,
}

impl DisplayUpdate {
    pub fn new(cell: CellRef, text: impl Into<String>) -> Self {
        DisplayUpdate {
            cell,
            text: text.into(),
        }
    }
}

/// UI-agnostic document state for the spreadsheet.
pub struct Document {
    /// The spreadsheet grid, fixed in size for the lifetime of the document
    pub grid: Grid,
    /// Settings the document was created with
    pub config: SheetConfig,
    /// Whether any cell has been edited since creation
    pub modified: bool,
}

impl Document {
    /// Create a document with every cell empty.
    pub fn new(config: SheetConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.dimensions()?);
        Ok(Document {
            grid,
            config,
            modified: false,
        })
    }

    /// Resolve a reference string such as "C4" to a coordinate in this grid.
    pub fn lookup(&self, reference: &str) -> Option<CellRef> {
        self.grid.lookup(reference)
    }

    pub fn reference_of(&self, cell: &CellRef) -> String {
        self.grid.reference_of(cell)
    }

    pub(crate) fn cell(&self, at: &CellRef) -> Result<&Cell> {
        self.grid.get(at).ok_or(SheetError::OutOfBounds(*at))
    }
}
