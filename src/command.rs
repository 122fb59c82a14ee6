//! Line-oriented commands driving a document.
//!
//! ```text
//! set A1 5          store input in a cell, prints every changed display
//! clear A1          empty a cell
//! edit C1           print the text a user would edit (e.g. =A1+B1+2.000000)
//! show C1           print the cell's current display
//! print             print the sheet as a table
//! ```

use anyhow::{Result, bail};
use sumsheet_core::{DisplayUpdate, Document, SheetConfig};
use sumsheet_engine::engine::CellRef;

use crate::screen::Screen;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Set { cell: String, input: String },
    Clear(String),
    Edit(String),
    Show(String),
    Print,
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match name {
            "set" => {
                let (cell, input) = rest.split_once(' ').unwrap_or((rest, ""));
                Command::Set {
                    cell: required_cell(name, cell)?,
                    input: input.to_string(),
                }
            }
            "clear" => Command::Clear(required_cell(name, rest.trim())?),
            "edit" => Command::Edit(required_cell(name, rest.trim())?),
            "show" => Command::Show(required_cell(name, rest.trim())?),
            "print" if rest.trim().is_empty() => Command::Print,
            "print" => bail!("print takes no arguments"),
            other => bail!("Unknown command: {}", other.trim_end()),
        };
        Ok(Some(command))
    }
}

fn required_cell(command: &str, cell: &str) -> Result<String> {
    if cell.is_empty() {
        bail!("{} requires a cell reference", command);
    }
    Ok(cell.to_string())
}

/// A document plus the display buffer a front-end keeps for it.
pub struct Session {
    pub doc: Document,
    pub screen: Screen,
}

impl Session {
    pub fn new(config: SheetConfig) -> Result<Self> {
        let doc = Document::new(config)?;
        let screen = Screen::new(doc.grid.dimensions(), doc.config.cell_display_width);
        Ok(Session { doc, screen })
    }

    fn resolve(&self, reference: &str) -> Result<CellRef> {
        Ok(CellRef::parse(reference, self.doc.grid.dimensions())?)
    }

    /// Record updates on the screen and describe them one per line.
    fn report(&mut self, updates: &[DisplayUpdate]) -> Vec<String> {
        self.screen.apply(updates);
        updates
            .iter()
            .map(|u| format!("{}: {}", self.doc.reference_of(&u.cell), u.text))
            .collect()
    }

    /// Run one command line, returning the lines to print.
    pub fn execute(&mut self, line: &str) -> Result<Vec<String>> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Vec::new());
        };

        let output = match command {
            Command::Set { cell, input } => {
                let at = self.resolve(&cell)?;
                let updates = self.doc.set_cell(at, input)?;
                self.report(&updates)
            }
            Command::Clear(cell) => {
                let at = self.resolve(&cell)?;
                let updates = self.doc.clear_cell(at)?;
                self.report(&updates)
            }
            Command::Edit(cell) => {
                let at = self.resolve(&cell)?;
                vec![self.doc.textual_value(&at)?]
            }
            Command::Show(cell) => {
                let at = self.resolve(&cell)?;
                vec![self.screen.display(&at).to_string()]
            }
            Command::Print => self.screen.render().lines().map(str::to_string).collect(),
        };
        Ok(output)
    }
}
