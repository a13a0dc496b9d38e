//! # Selection Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) of the
//! atom selection language, a small query language for picking atoms out of a
//! protein structure by name, position, residue and chain.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer, with source offsets
//! - **[predicate]** - Keywords and resolved leaf predicates
//! - **[operators]** - Logical operators joining two selections
//! - **[node]** - The tree itself
//!
//! ## Quick Start
//!
//! ```text
//! atom CA and residue ALA
//! ```
//!
//! Selects every alpha carbon of every alanine.
//!
//! ## Core Concepts
//!
//! ### Keywords and values
//!
//! A selection is built from `keyword value` pairs. Keywords (`atom`,
//! `residue`, `chain`) are case-insensitive; values are matched exactly.
//!
//! The kind of the value decides what is compared:
//!
//! - `atom CA` → atom name, `atom 12` → zero-based atom position
//! - `residue ALA` → residue name, `residue 10` → residue number
//! - `residue 10 to 20` → inclusive residue number range
//! - `chain H` → chain label (a numeric chain value is rejected)
//!
//! ### Logical operators
//!
//! `and` and `or` have the same precedence and group from the left:
//!
//! ```text
//! atom CA or atom CB and residue ALA
//! ```
//!
//! is read as `(atom CA or atom CB) and residue ALA`. Use parentheses to group
//! differently:
//!
//! ```text
//! atom CA or (atom CB and residue ALA)
//! ```
pub mod node;
pub mod operators;
pub mod predicate;
pub mod tokens;

pub use node::Node;
pub use operators::LogicalOp;
pub use predicate::{Keyword, LeafKind, Predicate};
pub use tokens::{Token, TokenKind};
