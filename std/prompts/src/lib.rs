//! MCP servers exposing example prompts with self-describing arguments.
//!
//! Every argument description ends with a type hint in parentheses, e.g.
//! `Team leads and their direct reports (Dict[str, List[str]])`, so clients
//! can recover typed argument models from the otherwise untyped listing.
//! - [`EchoPromptServer`]: templated subscription and project-report prompts
//! - [`ComplexDataServer`]: a prompt taking deeply nested collections

use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

pub mod complex;
pub mod echo;
pub mod validate;

pub use complex::ComplexDataServer;
pub use echo::EchoPromptServer;

/// Single user-message prompt result.
pub(crate) fn user_prompt(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}
