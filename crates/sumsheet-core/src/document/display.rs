use super::Document;
use crate::error::Result;
use sumsheet_engine::engine::{CellRef, CellType, EvalResult, evaluate_cell, format_display};

pub const PARSE_ERROR_MESSAGE: &str = "Error: Failed to parse formula";
pub const CIRCULAR_MESSAGE: &str = "Error: circular dependency detected";
pub const NON_NUMERIC_MESSAGE: &str = "Error: cell contains non-numeric value";

impl Document {
    /// Turn an evaluation outcome into the text shown in the cell.
    pub(crate) fn display_result(&self, result: EvalResult) -> String {
        match result {
            EvalResult::Value(n) => format_display(n, self.config.cell_display_width),
            EvalResult::CircularDependency => CIRCULAR_MESSAGE.to_string(),
            EvalResult::NonNumeric => NON_NUMERIC_MESSAGE.to_string(),
        }
    }

    /// Display text for a formula cell, evaluating it if it parsed.
    ///
    /// Returns `None` for text and number cells, whose display is the raw
    /// input the user typed.
    pub(crate) fn formula_display(&self, at: &CellRef) -> Result<Option<String>> {
        let text = match &self.cell(at)?.contents {
            CellType::Invalid(_) => PARSE_ERROR_MESSAGE.to_string(),
            CellType::Formula(_) => self.display_result(evaluate_cell(&self.grid, at)),
            CellType::Text(_) | CellType::Number(_) => return Ok(None),
        };
        Ok(Some(text))
    }
}
