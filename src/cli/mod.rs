//! CLI support for prosel
//!
//! Provides programmatic access to the `prosel` subcommands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod convert;
mod docs;
mod inspect;
mod logging;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{indices_to_json, json_to_atoms};
pub use docs::get_docs_overview;
pub use inspect::{render_tokens, render_tree};
pub use logging::{LOG_LEVEL_ENV, LogLevel, init_logging, resolve_log_level};

use std::io;

use thiserror::Error;

use crate::diagnostic;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Selection failed to compile; displays as a caret diagnostic
    #[error("{}", diagnostic::render(.selection, .error))]
    Parse {
        selection: String,
        #[source]
        error: crate::ParseError,
    },

    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON was valid but does not describe a list of atoms
    #[error("Invalid atom input: {0}")]
    InvalidInput(String),

    #[error("No input provided. Use --input or pipe a JSON atom list to stdin.")]
    NoInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CliError {
    pub fn parse(selection: &str, error: crate::ParseError) -> Self {
        CliError::Parse {
            selection: selection.to_string(),
            error,
        }
    }
}
