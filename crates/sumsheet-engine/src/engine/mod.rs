//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`], [`CellType`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`], [`Dimensions`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Formula`], [`Term`] - Addition-only formulas and their text form
//! - [`evaluate`], [`evaluate_cell`] - Recursive evaluation with cycle detection
//! - [`format_number`], [`format_display`] - Format values for editing and display

mod cell;
mod cell_ref;
mod error;
mod eval;
mod format;
mod formula;

pub use cell::{Cell, CellKind, CellType, EvalState, Grid};
pub use cell_ref::{CellRef, Dimensions, MAX_COLS, MAX_ROWS};
pub use error::{ParseError, ReferenceError};
pub use eval::{EvalResult, evaluate, evaluate_cell};
pub use format::{NUMBER_PRECISION, format_display, format_number};
pub use formula::{Formula, MAX_TERMS, Term};
