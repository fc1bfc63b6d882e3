//! Echo prompt server: subscription emails and project status reports.

use std::collections::BTreeMap;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::prompt::PromptRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParams, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    schemars::{self, JsonSchema},
    service::RequestContext,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    user_prompt,
    validate::{ArgumentError, lenient},
};

/// Arguments of the `basic` prompt.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BasicArgs {
    /// Name of the user (str)
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Lucky number (int)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "i64")]
    pub number: i64,
    /// Contact email address (EmailStr|str)
    #[validate(email)]
    pub email: String,
    /// Whether to subscribe to updates (bool)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "bool")]
    pub subscribe: bool,
}

/// Arguments of the `basic_plus` and `typed` prompts.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct MessageTaskArgs {
    /// Name of the user (str)
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// your lucky number (int)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "i64")]
    pub number: i64,
    /// Email address of the user (EmailStr)
    #[validate(email)]
    pub email: String,
    /// Whether the user wants to subscribe (bool)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "bool")]
    pub subscribe: bool,
}

/// Arguments of the `mixed` prompt.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ProjectStatusArgs {
    /// Name of the task (str)
    #[validate(length(min = 1, max = 100))]
    pub task: String,
    /// Status of the task (str)
    #[validate(length(min = 1, max = 100))]
    pub status: String,
    /// Priority of the task (int)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "i64")]
    pub priority: i64,
    /// list of assignees (List[str])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub assignees: Vec<String>,
}

/// Arguments of the `complex` prompt.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ComplexArgs {
    /// The name of the project (str)
    #[validate(length(min = 1, max = 100))]
    pub project_name: String,
    /// The unique identifier for the user (str)
    #[validate(length(min = 1, max = 50))]
    pub owner_username: String,
    /// The email address associated with the user (str)
    #[validate(length(min = 5, max = 100))]
    pub owner_email: String,
    /// Indicates whether the user's account is currently active (bool)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "bool")]
    pub owner_is_active: bool,
    /// Name of the task (str)
    #[validate(length(min = 1, max = 100))]
    pub statuses_task: String,
    /// Status of the task (str)
    #[validate(length(min = 1, max = 100))]
    pub statuses_status: String,
    /// Priority of the task (int)
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "i64")]
    pub statuses_priority: i64,
    /// list of assignees (List[str])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub statuses_assignees: Vec<String>,
    /// Dictionary of configuration settings with categories and options (Dict[str, List[str]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "BTreeMap<String, Vec<String>>")]
    pub settings: BTreeMap<String, Vec<String>>,
}

fn subscription_message(name: &str, number: i64, email: &str, subscribe: bool) -> GetPromptResult {
    tracing::debug!(subscribe, "rendering subscription message");

    let text = if subscribe {
        format!(
            "Hello {name}, thanks for subscribing today. We'll send updates to {email}.\n\
             {number} is your lucky number"
        )
    } else {
        format!(
            "Hello {name}, you unsubscribed today. We will no longer send updates to {email}.\n\
             {number} is your lucky number"
        )
    };
    user_prompt("Subscription message", text)
}

/// MCP prompt server for templated user messages.
#[derive(Clone)]
pub struct EchoPromptServer {
    prompt_router: PromptRouter<Self>,
}

#[prompt_router]
impl EchoPromptServer {
    /// Create a new echo prompt server.
    pub fn new() -> Self {
        Self {
            prompt_router: Self::prompt_router(),
        }
    }

    #[prompt(name = "basic", description = "Subscription message for a user")]
    async fn basic(
        &self,
        Parameters(args): Parameters<BasicArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;
        Ok(subscription_message(
            &args.name,
            args.number,
            &args.email,
            args.subscribe,
        ))
    }

    #[prompt(
        name = "basic_plus",
        description = "Subscription message using the shared task input descriptions"
    )]
    async fn basic_plus(
        &self,
        Parameters(args): Parameters<MessageTaskArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;
        Ok(subscription_message(
            &args.name,
            args.number,
            &args.email,
            args.subscribe,
        ))
    }

    #[prompt(name = "typed", description = "Subscription message from typed input")]
    async fn typed(
        &self,
        Parameters(args): Parameters<MessageTaskArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;
        Ok(subscription_message(
            &args.name,
            args.number,
            &args.email,
            args.subscribe,
        ))
    }

    #[prompt(name = "mixed", description = "Status report for a project")]
    async fn mixed(
        &self,
        Parameters(args): Parameters<ProjectStatusArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;

        let lines = [
            "Project Status Report".to_string(),
            "--------------------".to_string(),
            format!("Task Name: {}", args.task),
            format!("Status: {}", args.status),
            format!("Priority Level: {}", args.priority),
            format!("Assigned Team Members: {}", args.assignees.join(", ")),
        ];
        Ok(user_prompt("Project status report", lines.join("\n")))
    }

    #[prompt(name = "complex", description = "Comprehensive project report")]
    async fn complex(
        &self,
        Parameters(args): Parameters<ComplexArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;

        tracing::debug!(settings = args.settings.len(), "rendering project report");
        let account = if args.owner_is_active { "Active" } else { "Inactive" };
        let mut lines = vec![
            "Comprehensive Project Report".to_string(),
            "--------------------------".to_string(),
            format!("Project Name: {}", args.project_name),
            String::new(),
            "Owner Information:".to_string(),
            format!("- Username: {}", args.owner_username),
            format!("- Email: {}", args.owner_email),
            format!("- Account Status: {account}"),
            String::new(),
            "Current Status:".to_string(),
            format!("- Task: {}", args.statuses_task),
            format!("- Status: {}", args.statuses_status),
            format!("- Priority Level: {}", args.statuses_priority),
            format!(
                "- Assigned Team Members: {}",
                args.statuses_assignees.join(", ")
            ),
            String::new(),
            "Project Settings:".to_string(),
        ];
        lines.extend(
            args.settings
                .iter()
                .map(|(category, values)| format!("    {category}: {}", values.join(", "))),
        );
        Ok(user_prompt("Comprehensive project report", lines.join("\n")))
    }
}

impl Default for EchoPromptServer {
    fn default() -> Self {
        Self::new()
    }
}

#[prompt_handler]
impl ServerHandler for EchoPromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            server_info: Implementation {
                name: "EchoPromptServer".into(),
                title: Some("Walrus MCP Echo Prompt Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Prompt server rendering subscription messages and project reports. \
                 Argument descriptions end with their type in parentheses."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::echo::{
        BasicArgs, ComplexArgs, EchoPromptServer, MessageTaskArgs, ProjectStatusArgs,
    };
    use rmcp::{
        handler::server::wrapper::Parameters,
        model::{ErrorCode, GetPromptResult, PromptMessageContent},
    };
    use serde_json::json;

    fn text(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn basic_args(subscribe: bool) -> BasicArgs {
        BasicArgs {
            name: "Ada".into(),
            number: 7,
            email: "ada@example.com".into(),
            subscribe,
        }
    }

    #[test]
    fn routes_every_prompt() {
        let router = EchoPromptServer::prompt_router();
        for name in ["basic", "basic_plus", "typed", "mixed", "complex"] {
            assert!(router.has_route(name), "missing prompt {name}");
        }
    }

    #[tokio::test]
    async fn basic_subscribe() {
        let server = EchoPromptServer::new();
        let result = server.basic(Parameters(basic_args(true))).await.unwrap();
        assert_eq!(
            text(&result),
            "Hello Ada, thanks for subscribing today. We'll send updates to ada@example.com.\n\
             7 is your lucky number"
        );
    }

    #[tokio::test]
    async fn basic_unsubscribe() {
        let server = EchoPromptServer::new();
        let result = server.basic(Parameters(basic_args(false))).await.unwrap();
        assert!(text(&result).starts_with("Hello Ada, you unsubscribed today."));
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let server = EchoPromptServer::new();
        let err = server
            .typed(Parameters(MessageTaskArgs {
                name: "Ada".into(),
                number: 1,
                email: "not-an-email".into(),
                subscribe: true,
            }))
            .await
            .unwrap_err();
        assert!(err.message.contains("email (email)"));
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let server = EchoPromptServer::new();
        let err = server
            .basic_plus(Parameters(MessageTaskArgs {
                name: String::new(),
                number: 1,
                email: "ada@example.com".into(),
                subscribe: true,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("name (length)"));
    }

    #[tokio::test]
    async fn mixed_report() {
        let server = EchoPromptServer::new();
        let args: ProjectStatusArgs = serde_json::from_value(json!({
            "task": "Launch",
            "status": "In Progress",
            "priority": "1",
            "assignees": "[\"ada\", \"grace\"]"
        }))
        .unwrap();
        let result = server.mixed(Parameters(args)).await.unwrap();
        let report = text(&result);
        assert!(report.starts_with("Project Status Report"));
        assert!(report.contains("Priority Level: 1"));
        assert!(report.ends_with("Assigned Team Members: ada, grace"));
    }

    fn complex_args() -> serde_json::Value {
        json!({
            "project_name": "Walrus",
            "owner_username": "ada",
            "owner_email": "ada@example.com",
            "owner_is_active": false,
            "statuses_task": "Design",
            "statuses_status": "Completed",
            "statuses_priority": 2,
            "statuses_assignees": ["grace"],
            "settings": { "languages": ["rust", "python"], "ci": ["github"] }
        })
    }

    #[tokio::test]
    async fn complex_report() {
        let server = EchoPromptServer::new();
        let args: ComplexArgs = serde_json::from_value(complex_args()).unwrap();
        let result = server.complex(Parameters(args)).await.unwrap();
        let report = text(&result);
        assert!(report.contains("- Account Status: Inactive"));
        assert!(report.contains("- Assigned Team Members: grace"));
        assert!(report.ends_with("    ci: github\n    languages: rust, python"));
    }

    #[tokio::test]
    async fn complex_owner_constraints() {
        let server = EchoPromptServer::new();

        let mut raw = complex_args();
        raw["owner_username"] = json!("u".repeat(51));
        let args: ComplexArgs = serde_json::from_value(raw).unwrap();
        let err = server.complex(Parameters(args)).await.unwrap_err();
        assert!(err.message.contains("owner_username (length)"));

        let mut raw = complex_args();
        raw["owner_email"] = json!("a@b");
        let args: ComplexArgs = serde_json::from_value(raw).unwrap();
        let err = server.complex(Parameters(args)).await.unwrap_err();
        assert!(err.message.contains("owner_email (length)"));
    }

    #[tokio::test]
    async fn mixed_rejects_empty_task() {
        let server = EchoPromptServer::new();
        let err = server
            .mixed(Parameters(ProjectStatusArgs {
                task: String::new(),
                status: "Blocked".into(),
                priority: 3,
                assignees: Vec::new(),
            }))
            .await
            .unwrap_err();
        assert!(err.message.contains("task (length)"));
    }
}
