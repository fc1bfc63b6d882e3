//! [`FieldDescriptor`] extraction from raw argument records.
//!
//! Type resolution runs in two stages. The embedded hint (the final
//! parenthesized group of the description) is tried first; when there is
//! none, or it is not recognized, the coarse declared schema type decides.

use super::{ArgumentSchema, TypeExpr};

/// One argument's name, description, recovered type and required flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    description: String,
    ty: TypeExpr,
    required: bool,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ty: TypeExpr,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ty,
            required,
        }
    }

    /// Build a descriptor from a raw argument record.
    pub fn extract(argument: &ArgumentSchema) -> Self {
        let description = argument.description.clone().unwrap_or_default();
        let ty = resolve_type(&description, argument.schema_type.as_deref());
        Self {
            name: argument.name.clone(),
            description,
            ty,
            required: argument.required.unwrap_or(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ty(&self) -> &TypeExpr {
        &self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Resolve an argument's type: embedded hint first, declared type second.
pub fn resolve_type(description: &str, schema_type: Option<&str>) -> TypeExpr {
    embedded_hint(description)
        .and_then(TypeExpr::parse_hint)
        .unwrap_or_else(|| fallback_type(schema_type))
}

/// Type implied by the coarse declared schema type alone.
pub fn fallback_type(schema_type: Option<&str>) -> TypeExpr {
    schema_type.map_or(TypeExpr::ANY, TypeExpr::from_schema_type)
}

/// Content of the balanced parenthesized group that ends `description`.
pub fn embedded_hint(description: &str) -> Option<&str> {
    let body = description.trim_end().strip_suffix(')')?;
    let mut depth = 0usize;
    for (i, c) in body.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => return Some(body[i + 1..].trim()),
            '(' => depth -= 1,
            _ => {}
        }
    }
    None
}
