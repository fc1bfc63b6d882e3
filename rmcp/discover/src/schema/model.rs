//! Synthesized models: an ordered, named set of [`FieldDescriptor`]s.

use std::collections::HashSet;

use super::{FieldDescriptor, PromptSchema, SchemaError};

/// Typed record definition synthesized from one prompt's arguments.
///
/// Fields keep declaration order and have unique, non-empty names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            fields: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Synthesize the argument model of a prompt.
    pub fn from_schema(schema: &PromptSchema) -> Result<Self, SchemaError> {
        synthesize(
            model_name(&schema.name),
            schema.arguments().iter().map(FieldDescriptor::extract),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

/// Incremental [`Model`] construction that rejects bad field names.
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
    seen: HashSet<String>,
}

impl ModelBuilder {
    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Result<Self, SchemaError> {
        if field.name().is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        if !self.seen.insert(field.name().to_owned()) {
            return Err(SchemaError::DuplicateField {
                field: field.name().to_owned(),
            });
        }
        self.fields.push(field);
        Ok(self)
    }

    pub fn build(self) -> Model {
        Model {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// Build a [`Model`] from fields in declaration order.
pub fn synthesize(
    name: impl Into<String>,
    fields: impl IntoIterator<Item = FieldDescriptor>,
) -> Result<Model, SchemaError> {
    fields
        .into_iter()
        .try_fold(Model::builder(name), ModelBuilder::field)
        .map(ModelBuilder::build)
}

/// Model name for a prompt: `basic_plus` becomes `BasicPlusInput`.
pub fn model_name(prompt_name: &str) -> String {
    let mut name: String = prompt_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    if name.is_empty() {
        name.push_str("Prompt");
    }
    name.push_str("Input");
    name
}
