//! sumsheet_engine - Spreadsheet cell model + addition formula evaluator.

pub mod engine;
