//! Human-readable declarations of synthesized models.

use std::fmt;

use super::Model;

const NO_DESCRIPTION: &str = "No description provided";

/// Render `model` as a declaration, one line per field.
pub fn render(model: &Model) -> String {
    model.to_string()
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "model {} {{", self.name())?;
        for field in self.fields() {
            let description = match field.description() {
                "" => NO_DESCRIPTION,
                text => text,
            };
            let presence = if field.is_required() { "required" } else { "optional" };
            writeln!(
                f,
                "    {}: {} = {presence}, description: {description:?}",
                field.name(),
                field.ty(),
            )?;
        }
        f.write_str("}")
    }
}
