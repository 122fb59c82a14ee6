//! Error types for Sumsheet core.

use sumsheet_engine::engine::CellRef;
use thiserror::Error;

/// Errors that can occur in the Sumsheet document and its configuration
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cell {0} is outside the grid")]
    OutOfBounds(CellRef),

    #[error("Invalid grid size {rows}x{columns} (need 1-256 rows and 1-26 columns)")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
