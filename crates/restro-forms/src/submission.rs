// File: src/submission.rs
// Purpose: Converting submitted JSON payloads into raw form values

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::form::FormValues;

/// Flattens a JSON object of field values into strings
///
/// Numbers and booleans are stringified and `null` becomes an empty value,
/// mirroring what a browser form would post. Nested values are rejected.
pub fn values_from_json(payload: &Value) -> Result<FormValues> {
    let Some(object) = payload.as_object() else {
        bail!("Form submission must be a JSON object");
    };

    let mut values = FormValues::new();
    for (name, value) in object {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                bail!("Field '{}' must be a scalar value", name)
            }
        };
        values.insert(name.clone(), raw);
    }

    Ok(values)
}

/// Parses a JSON document and flattens it with [`values_from_json`]
pub fn parse_submission(input: &str) -> Result<FormValues> {
    let payload: Value = serde_json::from_str(input).context("Failed to parse form submission")?;
    values_from_json(&payload)
}
