//! JSON <-> atom conversion utilities

use serde_json::{Map, Value};

use super::CliError;
use crate::structure::Atom;

/// Convert a JSON array of atom objects into [`Atom`]s.
///
/// Each element needs string fields `name`, `residue` and `chain`. The
/// position defaults to the element's index and may be overridden with a
/// non-negative integer `position`.
///
/// ```text
/// [{"name": "CA", "residue": "ALA-1-", "chain": "A"}, ...]
/// ```
pub fn json_to_atoms(v: Value) -> Result<Vec<Atom>, CliError> {
    match v {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(obj) => json_to_atom(index, &obj),
                other => Err(CliError::InvalidInput(format!(
                    "atom {index} must be an object, got {}",
                    type_name(&other)
                ))),
            })
            .collect(),
        other => Err(CliError::InvalidInput(format!(
            "expected an array of atoms, got {}",
            type_name(&other)
        ))),
    }
}

fn json_to_atom(index: usize, obj: &Map<String, Value>) -> Result<Atom, CliError> {
    let position = match obj.get("position") {
        None => index,
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|p| usize::try_from(p).ok())
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "atom {index}: position must be a non-negative integer, got {n}"
                ))
            })?,
        Some(other) => {
            return Err(CliError::InvalidInput(format!(
                "atom {index}: position must be a number, got {}",
                type_name(other)
            )));
        }
    };

    Ok(Atom::new(
        position,
        string_field(index, obj, "name")?,
        string_field(index, obj, "residue")?,
        string_field(index, obj, "chain")?,
    ))
}

fn string_field(index: usize, obj: &Map<String, Value>, field: &str) -> Result<String, CliError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(CliError::InvalidInput(format!(
            "atom {index}: '{field}' must be a string, got {}",
            type_name(other)
        ))),
        None => Err(CliError::InvalidInput(format!(
            "atom {index}: missing '{field}'"
        ))),
    }
}

/// Convert selected positions into a JSON array
pub fn indices_to_json(indices: &[usize]) -> Value {
    Value::Array(indices.iter().map(|&i| Value::from(i)).collect())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
