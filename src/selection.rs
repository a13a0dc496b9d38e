//! Compiled, reusable selections.
//!
//! A [`SelectionExpression`] is parsed once and can then be evaluated against
//! any number of atom collections. The tree is immutable, so one compiled
//! selection can be shared between threads and evaluated concurrently.
//!
//! # Examples
//!
//! ```
//! use prosel::compile;
//! use prosel::structure::Atom;
//!
//! let atoms = vec![
//!     Atom::new(0, "N", "ALA-1-", "H"),
//!     Atom::new(1, "CA", "ALA-1-", "H"),
//!     Atom::new(2, "CA", "GLY-2-", "H"),
//! ];
//!
//! let selection = compile("atom CA and residue ALA").unwrap();
//! assert_eq!(selection.evaluate(&atoms).unwrap(), vec![1]);
//! ```

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    ast::Node,
    evaluator::{EvalError, Evaluator},
    lexer::Lexer,
    parser::{ParseError, Parser},
    structure::Candidate,
};

/// Compiles a selection; shorthand for [`SelectionExpression::new`].
pub fn compile(source: &str) -> Result<SelectionExpression, ParseError> {
    SelectionExpression::new(source)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionExpression {
    source: String,
    root: Node,
}

impl SelectionExpression {
    /// Lexes and parses `source` completely. No expression is produced unless
    /// the whole input is a valid selection.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new(Lexer::new(source))?;
        let root = parser.parse()?;

        debug!(
            source,
            leaves = root.leaf_count(),
            depth = root.depth(),
            "compiled selection"
        );
        Ok(SelectionExpression {
            source: source.to_string(),
            root,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Positions of the selected candidates, in input order.
    pub fn evaluate<C: Candidate>(&self, candidates: &[C]) -> Result<Vec<usize>, EvalError> {
        let selected = Evaluator::new(&self.root).select(candidates)?;
        debug!(
            source = %self.source,
            candidates = candidates.len(),
            selected = selected.len(),
            "evaluated selection"
        );
        Ok(selected)
    }

    pub fn matches<C: Candidate + ?Sized>(&self, candidate: &C) -> bool {
        Evaluator::new(&self.root).matches(candidate)
    }

    /// Number of selected candidates. Fails exactly when [`evaluate`] does.
    ///
    /// [`evaluate`]: SelectionExpression::evaluate
    pub fn count<C: Candidate>(&self, candidates: &[C]) -> Result<usize, EvalError> {
        self.evaluate(candidates).map(|selected| selected.len())
    }
}

impl FromStr for SelectionExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectionExpression::new(s)
    }
}

impl fmt::Display for SelectionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
