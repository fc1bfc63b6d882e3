//! Discover the prompts of an MCP server and synthesize typed argument models.
//!
//! For every prompt a server lists, the argument schema is turned into a
//! [`schema::Model`] whose field types are recovered from type hints embedded
//! in the argument descriptions. Each model is reported as a printed
//! declaration plus an example JSON payload.

pub mod client;
pub mod cmd;
pub mod discover;
pub mod error;
pub mod schema;

pub use discover::{DiscoveredPrompt, PromptReport, discover};
pub use error::Error;
