//! sumsheet-core - UI-agnostic document model + configuration.

pub mod config;
pub mod document;
pub mod error;

pub use config::{SheetConfig, load_config};
pub use document::{DisplayUpdate, Document};
pub use error::{Result, SheetError};

pub use sumsheet_engine::engine::CellRef;
