//! Addition-only formulas.
//!
//! A formula is the text after the leading `=`, split on `+` into at most
//! [`MAX_TERMS`] terms. Each term is a number or a reference to another cell:
//!
//! ```text
//! =A1+B1+2   ->  [Reference(A1), Reference(B1), Constant(2.0)]
//! ```

use std::fmt;

use tracing::trace;

use super::cell_ref::{CellRef, Dimensions};
use super::error::ParseError;
use super::format::format_number;

/// Maximum number of operands in a formula.
pub const MAX_TERMS: usize = 10;

/// One operand of a formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Term {
    Constant(f64),
    /// Lookup-only link to another cell, resolved at evaluation time.
    Reference(CellRef),
}

/// A parsed formula: the sum of its terms, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Formula {
    terms: Vec<Term>,
}

impl Formula {
    /// Parse formula text with the leading `=` already removed.
    ///
    /// Empty pieces are skipped, so `""` yields a formula with no terms
    /// (which sums to 0) and `"1++2"` has two terms.
    pub fn parse(text: &str, dims: Dimensions) -> Result<Formula, ParseError> {
        let pieces = || text.split('+').filter(|p| !p.is_empty());
        let mut terms = Vec::new();
        for piece in pieces() {
            if terms.len() == MAX_TERMS {
                return Err(ParseError::TooManyTerms {
                    count: pieces().count(),
                    max: MAX_TERMS,
                });
            }
            terms.push(parse_term(piece, dims)?);
        }
        trace!(text, terms = terms.len(), "parsed formula");
        Ok(Formula { terms })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Cells this formula reads directly.
    pub fn references(&self) -> impl Iterator<Item = &CellRef> {
        self.terms.iter().filter_map(|term| match term {
            Term::Reference(cell) => Some(cell),
            Term::Constant(_) => None,
        })
    }

    /// Render back to `=`-prefixed text, e.g. `=A1+2.000000`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

fn parse_term(piece: &str, dims: Dimensions) -> Result<Term, ParseError> {
    if let Ok(n) = piece.trim().parse::<f64>() {
        return Ok(Term::Constant(n));
    }
    CellRef::parse(piece, dims)
        .map(Term::Reference)
        .map_err(|_| ParseError::InvalidTerm(piece.to_string()))
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("=")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            match term {
                Term::Constant(n) => f.write_str(&format_number(*n))?,
                Term::Reference(cell) => write!(f, "{}", cell)?,
            }
        }
        Ok(())
    }
}
