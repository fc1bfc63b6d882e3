//! Schema-driven model synthesis for remote prompt arguments.
//!
//! Raw argument records flow one way through this module:
//! [`ArgumentSchema`] → [`FieldDescriptor`] (with a recovered [`TypeExpr`])
//! → [`Model`] → a printed declaration ([`printer`]) and an example payload
//! ([`example`]). Everything here is pure; I/O lives in [`crate::discover`].

use rmcp::model::Prompt;
use serde::Deserialize;
use thiserror::Error;

pub mod example;
pub mod field;
pub mod model;
pub mod printer;
pub mod types;

pub use field::FieldDescriptor;
pub use model::{Model, ModelBuilder};
pub use types::{ScalarKind, TypeExpr};

/// Errors raised while synthesizing a model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two arguments of one prompt share a name.
    #[error("duplicate field name: {field}")]
    DuplicateField { field: String },

    /// An argument has an empty name.
    #[error("argument with an empty name")]
    EmptyFieldName,
}

/// Argument schema of a single prompt, as advertised by the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    arguments: Option<Vec<ArgumentSchema>>,
}

impl PromptSchema {
    /// Decode the schema from a listed [`Prompt`].
    pub fn from_prompt(prompt: &Prompt) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(prompt)?)
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> &[ArgumentSchema] {
        self.arguments.as_deref().unwrap_or_default()
    }
}

/// One raw argument record.
///
/// MCP prompt arguments carry no `type`; servers that want to expose one
/// embed it in the description instead, e.g. `"Tags (List[str])"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArgumentSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
}
