pub mod ast;
pub mod diagnostic;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod selection;
pub mod structure;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Keyword, LeafKind, LogicalOp, Node, Predicate, Token, TokenKind};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexer, Span};
pub use parser::{ParseError, Parser};
pub use selection::{SelectionExpression, compile};
pub use structure::{Atom, Candidate};
