//! Discovery runs: list prompts, synthesize a model per prompt, report.
//!
//! A failure while handling one prompt is recorded in that prompt's
//! [`PromptReport`] and the run moves on. Only a failed listing or a
//! cancellation ends the run early.

use std::fmt;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    client::PromptSource,
    error::Error,
    schema::{Model, PromptSchema, example, printer},
};

/// Outputs produced for one successfully processed prompt.
#[derive(Debug, Clone)]
pub struct DiscoveredPrompt {
    pub model: Model,
    /// Printed model declaration.
    pub declaration: String,
    /// Example payload as 4-space indented JSON.
    pub example: String,
}

impl DiscoveredPrompt {
    /// Run the synthesis pipeline on one prompt schema.
    pub fn from_schema(schema: &PromptSchema) -> Result<Self, Error> {
        let model = Model::from_schema(schema)?;
        let declaration = printer::render(&model);
        let example = example::to_pretty_json(&example::for_model(&model))?;
        Ok(Self {
            model,
            declaration,
            example,
        })
    }
}

/// Result of processing one listed prompt.
#[derive(Debug)]
pub struct PromptReport {
    pub name: String,
    pub description: Option<String>,
    pub outcome: Result<DiscoveredPrompt, Error>,
}

impl fmt::Display for PromptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "#".repeat(80))?;
        writeln!(f, "Prompt: {}", self.name)?;
        writeln!(
            f,
            "Description: {}",
            self.description.as_deref().unwrap_or("")
        )?;
        match &self.outcome {
            Ok(found) => {
                writeln!(f, "\nModel:")?;
                writeln!(f, "{}", found.declaration)?;
                writeln!(f, "\nExample Input Structure:")?;
                write!(f, "{}", found.example)
            }
            Err(e) => write!(f, "\nFailed: {e}"),
        }
    }
}

/// Discover every prompt of `source`, in listing order.
///
/// Cancelling `cancel` stops the run before the next remote call and
/// abandons any call in flight.
pub async fn discover<S: PromptSource>(
    source: &S,
    cancel: &CancellationToken,
) -> Result<Vec<PromptReport>, Error> {
    let prompts = until_cancelled(cancel, source.list_prompts()).await?;
    info!(count = prompts.len(), "listed prompts");

    let mut reports = Vec::with_capacity(prompts.len());
    for prompt in &prompts {
        debug!(prompt = %prompt.name, "fetching prompt schema");
        let outcome = match until_cancelled(cancel, source.prompt_schema(prompt)).await {
            Err(Error::Cancelled) => return Err(Error::Cancelled),
            Err(e) => Err(e),
            Ok(schema) => DiscoveredPrompt::from_schema(&schema),
        };
        if let Err(e) = &outcome {
            warn!(prompt = %prompt.name, error = %e, "prompt discovery failed");
        }
        reports.push(PromptReport {
            name: prompt.name.clone(),
            description: prompt.description.clone(),
            outcome,
        });
    }
    Ok(reports)
}

async fn until_cancelled<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = call => result,
    }
}
