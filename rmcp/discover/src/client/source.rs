//! [`PromptSource`] trait for reading prompt schemas from a server.

use crate::{error::Error, schema::PromptSchema};
use rmcp::{RoleClient, model::Prompt, service::RunningService};

/// Where a discovery run reads prompts and their argument schemas from.
///
/// Both methods are remote calls on a live session and are the only
/// suspension points of a run.
pub trait PromptSource {
    /// List all prompts exposed by the server, in server order.
    fn list_prompts(&self) -> impl Future<Output = Result<Vec<Prompt>, Error>> + Send;

    /// Fetch the argument schema of one listed prompt.
    fn prompt_schema(
        &self,
        prompt: &Prompt,
    ) -> impl Future<Output = Result<PromptSchema, Error>> + Send;
}

impl PromptSource for RunningService<RoleClient, ()> {
    async fn list_prompts(&self) -> Result<Vec<Prompt>, Error> {
        Ok(self.peer().list_all_prompts().await?)
    }

    // The listing already carries the argument records.
    async fn prompt_schema(&self, prompt: &Prompt) -> Result<PromptSchema, Error> {
        Ok(PromptSchema::from_prompt(prompt)?)
    }
}
