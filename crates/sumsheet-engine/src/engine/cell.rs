//! Cell data structures for the spreadsheet grid.
//!
//! This module provides the core data types for representing cells:
//! - [`CellType`] - The content of a cell (text, number, or formula)
//! - [`Cell`] - A cell with content and its transient evaluation state
//! - [`Grid`] - Fixed-size dense storage owning every cell

use std::cell::Cell as StateSlot;

use super::cell_ref::{CellRef, Dimensions};
use super::formula::Formula;

/// The content stored in a cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellType {
    Text(String),
    Number(f64),
    Formula(Formula),
    /// Formula input that failed to parse, kept verbatim (including the `=`).
    Invalid(String),
}

/// Coarse classification of [`CellType`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellKind {
    Text,
    Number,
    Formula,
}

/// Progress of a cell within one evaluation pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EvalState {
    #[default]
    NotEvaluated,
    Evaluating,
    Evaluated,
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug)]
pub struct Cell {
    pub contents: CellType,
    state: StateSlot<EvalState>,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::new_text("")
    }

    pub fn new_text(text: &str) -> Cell {
        Cell::with_contents(CellType::Text(text.to_string()))
    }

    pub fn new_number(n: f64) -> Cell {
        Cell::with_contents(CellType::Number(n))
    }

    pub fn new_formula(formula: Formula) -> Cell {
        Cell::with_contents(CellType::Formula(formula))
    }

    pub fn new_invalid(input: &str) -> Cell {
        Cell::with_contents(CellType::Invalid(input.to_string()))
    }

    fn with_contents(contents: CellType) -> Cell {
        Cell {
            contents,
            state: StateSlot::new(EvalState::NotEvaluated),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self.contents {
            CellType::Text(_) => CellKind::Text,
            CellType::Number(_) => CellKind::Number,
            CellType::Formula(_) | CellType::Invalid(_) => CellKind::Formula,
        }
    }

    /// True for a text cell with no text (the state of a fresh grid).
    pub fn is_empty(&self) -> bool {
        matches!(&self.contents, CellType::Text(s) if s.is_empty())
    }

    /// The parsed formula, if this cell holds one.
    pub fn formula(&self) -> Option<&Formula> {
        match &self.contents {
            CellType::Formula(formula) => Some(formula),
            _ => None,
        }
    }

    pub fn eval_state(&self) -> EvalState {
        self.state.get()
    }

    pub(crate) fn set_eval_state(&self, state: EvalState) {
        self.state.set(state);
    }

    /// Text used when the user starts editing the cell.
    pub fn to_input_string(&self) -> String {
        match &self.contents {
            CellType::Text(s) => s.clone(),
            CellType::Number(n) => super::format::format_number(*n),
            CellType::Formula(formula) => formula.to_text(),
            CellType::Invalid(raw) => raw.clone(),
        }
    }
}

/// Fixed-size grid storage, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(dims: Dimensions) -> Grid {
        Grid {
            dims,
            cells: vec![Cell::new_empty(); dims.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn index(&self, cell: &CellRef) -> Option<usize> {
        self.dims
            .contains(cell)
            .then(|| cell.row * self.dims.cols() + cell.col)
    }

    pub fn get(&self, cell: &CellRef) -> Option<&Cell> {
        self.index(cell).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, cell: &CellRef) -> Option<&mut Cell> {
        self.index(cell).map(|i| &mut self.cells[i])
    }

    /// Replace a cell's content, dropping the previous content.
    /// Returns false if `cell` is outside the grid.
    pub fn set(&mut self, cell: &CellRef, new_cell: Cell) -> bool {
        match self.get_mut(cell) {
            Some(slot) => {
                *slot = new_cell;
                true
            }
            None => false,
        }
    }

    /// Resolve a reference string such as "B2" to a coordinate inside this grid.
    pub fn lookup(&self, reference: &str) -> Option<CellRef> {
        CellRef::parse(reference, self.dims).ok()
    }

    /// Reference string for a coordinate, the inverse of [`Grid::lookup`].
    pub fn reference_of(&self, cell: &CellRef) -> String {
        cell.to_string()
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        let cols = self.dims.cols();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellRef::new(i / cols, i % cols), cell))
    }

    /// Formula cells that reference `target` directly.
    pub fn direct_dependents(&self, target: &CellRef) -> Vec<CellRef> {
        self.iter()
            .filter(|(_, cell)| {
                cell.formula()
                    .is_some_and(|f| f.references().any(|r| r == target))
            })
            .map(|(at, _)| at)
            .collect()
    }
}
