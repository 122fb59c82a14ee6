//! Document state and logic (UI-agnostic).

mod display;
mod ops;
mod state;

pub use display::{CIRCULAR_MESSAGE, NON_NUMERIC_MESSAGE, PARSE_ERROR_MESSAGE};
pub use state::{DisplayUpdate, Document};
