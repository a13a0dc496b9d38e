use std::{cell::OnceCell, collections::HashSet};

use thiserror::Error;

use crate::{
    ast::{LogicalOp, Node, Predicate},
    structure::{Candidate, ResidueLabel},
};

/// Per-atom evaluation context.
///
/// The residue label is only split when a residue predicate asks for it, and
/// at most once per atom.
pub(crate) struct EvalContext<'c, C: Candidate + ?Sized> {
    candidate: &'c C,
    residue: OnceCell<ResidueLabel<'c>>,
}

impl<'c, C: Candidate + ?Sized> EvalContext<'c, C> {
    pub(crate) fn new(candidate: &'c C) -> Self {
        EvalContext {
            candidate,
            residue: OnceCell::new(),
        }
    }

    fn residue(&self) -> &ResidueLabel<'c> {
        let candidate = self.candidate;
        self.residue
            .get_or_init(|| ResidueLabel::parse(candidate.residue_label()))
    }
}

/// Errors that can occur while evaluating a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Two matching candidates reported the same position, so the result
    /// would no longer identify atoms uniquely
    #[error("position {position} is shared by more than one candidate")]
    DuplicatePosition { position: usize },
}

/// Tree-walking interpreter for one compiled selection.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'n> {
    root: &'n Node,
}

impl<'n> Evaluator<'n> {
    pub fn new(root: &'n Node) -> Self {
        Evaluator { root }
    }

    /// Whether a single atom is selected.
    pub fn matches<C: Candidate + ?Sized>(&self, candidate: &C) -> bool {
        let ctx = EvalContext::new(candidate);
        self.eval_node(self.root, &ctx)
    }

    /// Positions of every selected candidate, in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prosel::{Evaluator, Lexer, Parser};
    /// use prosel::structure::Atom;
    ///
    /// let atoms = vec![
    ///     Atom::new(0, "N", "ALA-1-", "A"),
    ///     Atom::new(1, "CA", "ALA-1-", "A"),
    /// ];
    ///
    /// let mut parser = Parser::new(Lexer::new("atom CA")).unwrap();
    /// let tree = parser.parse().unwrap();
    ///
    /// let selected = Evaluator::new(&tree).select(&atoms).unwrap();
    /// assert_eq!(selected, vec![1]);
    /// ```
    pub fn select<C: Candidate>(&self, candidates: &[C]) -> Result<Vec<usize>, EvalError> {
        let mut selected = Vec::new();
        let mut seen = HashSet::new();

        for candidate in candidates {
            if !self.matches(candidate) {
                continue;
            }
            let position = candidate.position();
            if !seen.insert(position) {
                return Err(EvalError::DuplicatePosition { position });
            }
            selected.push(position);
        }
        Ok(selected)
    }

    fn eval_node<C: Candidate + ?Sized>(&self, node: &Node, ctx: &EvalContext<'_, C>) -> bool {
        match node {
            Node::Leaf(predicate) => self.eval_predicate(predicate, ctx),
            Node::Binary { op, left, right } => match op {
                LogicalOp::And => self.eval_node(left, ctx) && self.eval_node(right, ctx),
                LogicalOp::Or => self.eval_node(left, ctx) || self.eval_node(right, ctx),
            },
        }
    }

    fn eval_predicate<C: Candidate + ?Sized>(
        &self,
        predicate: &Predicate,
        ctx: &EvalContext<'_, C>,
    ) -> bool {
        let atom = ctx.candidate;
        match predicate {
            Predicate::AtomName(name) => atom.name() == name,
            Predicate::AtomNumber(position) => atom.position() == *position,
            Predicate::ResidueName(name) => ctx.residue().name == name,
            Predicate::ResidueNumber(number) => ctx.residue().number == Some(number.as_str()),
            Predicate::ResidueRange { start, end } => ctx
                .residue()
                .number()
                .is_some_and(|n| (*start..=*end).contains(&n)),
            Predicate::ChainName(chain) => atom.chain_label() == chain,
        }
    }
}
