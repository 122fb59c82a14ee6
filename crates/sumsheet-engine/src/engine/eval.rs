//! Recursive formula evaluation.
//!
//! A pass walks the reference graph depth-first. Every cell it enters is
//! marked [`EvalState::Evaluating`] until its value is known; reaching a cell
//! that is still `Evaluating` means the formula depends on itself. A cell
//! that is `Evaluated` is not walked again: its value is remembered for the
//! rest of the pass, so each cell is computed at most once. The states live
//! on the cells, so the pass guard records every cell it touched and resets
//! them to `NotEvaluated` when it is dropped.

use std::collections::HashMap;

use tracing::debug;

use super::cell::{Cell, CellType, EvalState, Grid};
use super::cell_ref::CellRef;
use super::formula::{Formula, Term};

/// Outcome of evaluating a formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvalResult {
    Value(f64),
    /// A referenced cell was re-entered while still being evaluated.
    CircularDependency,
    /// A referenced cell (possibly several hops away) holds text or a broken formula.
    NonNumeric,
}

impl EvalResult {
    pub fn value(self) -> Option<f64> {
        match self {
            EvalResult::Value(n) => Some(n),
            _ => None,
        }
    }
}

/// Evaluate `formula` against `grid`.
///
/// The formula's own cell is not marked, so a cycle back to it is detected
/// one step later, when the first cell on the cycle is re-entered.
pub fn evaluate(grid: &Grid, formula: &Formula) -> EvalResult {
    Pass::new(grid).sum(formula)
}

/// Evaluate the cell at `at` as the root of a pass.
///
/// The root is handled exactly like a referenced cell: numbers evaluate to
/// themselves, text is non-numeric and a formula is marked before recursing,
/// so `A1 = A1` is reported as circular.
pub fn evaluate_cell(grid: &Grid, at: &CellRef) -> EvalResult {
    Pass::new(grid).cell_value(at)
}

struct Pass<'g> {
    grid: &'g Grid,
    touched: Vec<CellRef>,
    /// Values of cells that reached `Evaluated` in this pass.
    values: HashMap<CellRef, f64>,
}

impl<'g> Pass<'g> {
    fn new(grid: &'g Grid) -> Self {
        Pass {
            grid,
            touched: Vec::new(),
            values: HashMap::new(),
        }
    }

    fn sum(&mut self, formula: &Formula) -> EvalResult {
        let mut total = 0.0;
        for term in formula.terms() {
            match term {
                Term::Constant(n) => total += n,
                Term::Reference(at) => match self.cell_value(at) {
                    EvalResult::Value(n) => total += n,
                    failure => return failure,
                },
            }
        }
        EvalResult::Value(total)
    }

    fn cell_value(&mut self, at: &CellRef) -> EvalResult {
        let grid = self.grid;
        let Some(cell) = grid.get(at) else {
            return EvalResult::NonNumeric;
        };

        match cell.eval_state() {
            EvalState::Evaluating => {
                debug!(cell = %at, "circular dependency detected");
                return EvalResult::CircularDependency;
            }
            EvalState::Evaluated => {
                if let Some(&n) = self.values.get(at) {
                    return EvalResult::Value(n);
                }
            }
            EvalState::NotEvaluated => {}
        }

        let result = match &cell.contents {
            CellType::Formula(formula) => {
                self.enter(at, cell);
                self.sum(formula)
            }
            CellType::Number(n) => {
                self.enter(at, cell);
                EvalResult::Value(*n)
            }
            CellType::Text(_) | CellType::Invalid(_) => return EvalResult::NonNumeric,
        };

        if let EvalResult::Value(n) = result {
            cell.set_eval_state(EvalState::Evaluated);
            self.values.insert(*at, n);
        }
        result
    }

    /// Mark a cell `Evaluating`, recording it for reset on the first visit only.
    fn enter(&mut self, at: &CellRef, cell: &Cell) {
        if cell.eval_state() == EvalState::NotEvaluated {
            self.touched.push(*at);
        }
        cell.set_eval_state(EvalState::Evaluating);
    }
}

impl Drop for Pass<'_> {
    fn drop(&mut self) {
        for at in &self.touched {
            if let Some(cell) = self.grid.get(at) {
                cell.set_eval_state(EvalState::NotEvaluated);
            }
        }
    }
}
