//! Argument decoding and validation shared by the prompt servers.
//!
//! Prompt arguments reach the server as strings, so typed arguments go
//! through [`lenient`], which also accepts a string holding the JSON form.
//! Field constraints are declared with `#[derive(Validate)]` on the argument
//! structs and surface to the caller through [`ArgumentError`].

use rmcp::ErrorData as McpError;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

/// Prompt arguments that failed their declared constraints.
#[derive(Error, Debug)]
#[error("invalid prompt arguments: {}", describe(.0))]
pub struct ArgumentError(#[from] pub ValidationErrors);

impl From<ArgumentError> for McpError {
    fn from(e: ArgumentError) -> Self {
        McpError::invalid_params(e.to_string(), None)
    }
}

/// `field (code, ...)` per failing field, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{field} ({})", codes.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}

/// Deserialize `T` from its JSON form or from a string containing it.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => serde_json::from_str(&text)
            .or_else(|_| serde_json::from_value(Value::String(text)))
            .map_err(serde::de::Error::custom),
        other => serde_json::from_value(other).map_err(serde::de::Error::custom),
    }
}
