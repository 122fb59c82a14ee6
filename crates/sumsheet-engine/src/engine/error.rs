//! Error types for reference and formula parsing.

use thiserror::Error;

/// Why a cell reference string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid cell reference: {0:?}")]
    Malformed(String),

    #[error("Cell reference {0} is outside the grid")]
    OutOfRange(String),
}

/// Errors produced while turning formula text into a [`Formula`](super::Formula).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `+`-separated piece is neither a number nor a reference inside the grid.
    #[error("Invalid formula term: {0:?}")]
    InvalidTerm(String),

    #[error("Formula has {count} terms, at most {max} are allowed")]
    TooManyTerms { count: usize, max: usize },
}
