use std::collections::{HashSet, VecDeque};

use super::display::PARSE_ERROR_MESSAGE;
use super::{DisplayUpdate, Document};
use crate::error::Result;
use sumsheet_engine::engine::{Cell, CellRef, Formula};
use tracing::debug;

impl Document {
    /// Set cell contents from raw input.
    ///
    /// Input starting with `=` is a formula; anything else is stored as a
    /// number if it parses as one and as text otherwise. The first update is
    /// for `at` itself, followed by any dependents that were re-evaluated.
    pub fn set_cell(&mut self, at: CellRef, input: String) -> Result<Vec<DisplayUpdate>> {
        self.cell(&at)?;

        let parsed = input
            .strip_prefix('=')
            .map(|text| Formula::parse(text, self.grid.dimensions()));

        let (cell, display) = match parsed {
            Some(Ok(formula)) => (Cell::new_formula(formula), None),
            Some(Err(err)) => {
                debug!(cell = %at, error = %err, "formula rejected");
                (Cell::new_invalid(&input), Some(PARSE_ERROR_MESSAGE.to_string()))
            }
            None => match input.trim().parse::<f64>() {
                Ok(n) => (Cell::new_number(n), Some(input)),
                Err(_) => (Cell::new_text(&input), Some(input)),
            },
        };

        self.grid.set(&at, cell);
        self.modified = true;
        debug!(cell = %at, "cell set");

        let text = match display {
            Some(text) => text,
            None => self.formula_display(&at)?.unwrap_or_default(),
        };
        self.finish_edit(at, text)
    }

    /// Clear the specified cell back to empty text.
    pub fn clear_cell(&mut self, at: CellRef) -> Result<Vec<DisplayUpdate>> {
        self.cell(&at)?;
        self.grid.set(&at, Cell::new_empty());
        self.modified = true;
        debug!(cell = %at, "cell cleared");
        self.finish_edit(at, String::new())
    }

    /// Text to pre-fill when the user starts editing a cell: the formula
    /// source, the number in fixed-point form, or the stored text.
    pub fn textual_value(&self, at: &CellRef) -> Result<String> {
        Ok(self.cell(at)?.to_input_string())
    }

    fn finish_edit(&self, at: CellRef, text: String) -> Result<Vec<DisplayUpdate>> {
        let mut updates = vec![DisplayUpdate::new(at, text)];
        if self.config.recalculate_dependents {
            updates.extend(self.recalculate_dependents(&at)?);
        }
        Ok(updates)
    }

    /// Re-evaluate every formula that depends (transitively) on the changed cell.
    fn recalculate_dependents(&self, changed: &CellRef) -> Result<Vec<DisplayUpdate>> {
        let mut to_process: VecDeque<CellRef> = self.grid.direct_dependents(changed).into();
        let mut visited = HashSet::from([*changed]);
        let mut updates = Vec::new();

        while let Some(dep) = to_process.pop_front() {
            if !visited.insert(dep) {
                continue;
            }
            if let Some(text) = self.formula_display(&dep)? {
                updates.push(DisplayUpdate::new(dep, text));
            }
            to_process.extend(self.grid.direct_dependents(&dep));
        }

        if !updates.is_empty() {
            debug!(cell = %changed, count = updates.len(), "recalculated dependents");
        }
        Ok(updates)
    }
}
