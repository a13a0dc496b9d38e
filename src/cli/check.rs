//! Run selections against JSON atom lists

use super::{CliError, indices_to_json, json_to_atoms};
use crate::SelectionExpression;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selection to run
    pub selection: String,
    /// JSON atom list
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Selection evaluated; holds the selected positions as a JSON array
    Success(serde_json::Value),
}

/// Execute a prosel check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let selection = SelectionExpression::new(&options.selection)
        .map_err(|e| CliError::parse(&options.selection, e))?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let atoms = json_to_atoms(json_value)?;

    let selected = selection.evaluate(&atoms)?;
    Ok(CheckResult::Success(indices_to_json(&selected)))
}
