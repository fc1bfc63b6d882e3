//! Complex data prompt server: arguments built from nested collections.

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

/// Arguments of the `nested_collections` prompt.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct NestedCollectionsArgs {
    /// Name of the project (str)
    #[validate(length(min = 1))]
    pub project_name: String,
    /// User's unique identifier (str)
    #[validate(length(min = 1))]
    pub owner_username: String,
    /// User's email address (EmailStr)
    #[validate(email)]
    pub owner_email: String,
    /// List of assigned roles (List[str])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub owner_roles: Vec<String>,
    /// User preferences with multiple options (Dict[str, List[str]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "BTreeMap<String, Vec<String>>")]
    pub owner_preferences: BTreeMap<String, Vec<String>>,
    /// Names of the metrics being tracked (List[str])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<String>")]
    pub metric_names: Vec<String>,
    /// Matrix of daily metric values (List[List[float]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<Vec<f64>>")]
    pub daily_values: Vec<Vec<f64>>,
    /// Target value for each metric (Dict[str, float])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "BTreeMap<String, f64>")]
    pub metric_targets: BTreeMap<String, f64>,
    /// Team leads and their direct reports (Dict[str, List[str]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "BTreeMap<String, Vec<String>>")]
    pub team_leads: BTreeMap<String, Vec<String>>,
    /// Team specialties and capabilities (Dict[str, Dict[str, List[str]]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "BTreeMap<String, BTreeMap<String, Vec<String>>>")]
    pub team_specialties: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Office locations and details (List[Dict[str, str]])
    #[serde(deserialize_with = "lenient")]
    #[schemars(with = "Vec<BTreeMap<String, String>>")]
    pub team_locations: Vec<BTreeMap<String, String>>,
}

/// MCP prompt server whose prompt takes deeply nested arguments.
#[derive(Clone)]
pub struct ComplexDataServer {
    prompt_router: PromptRouter<Self>,
}

#[prompt_router]
impl ComplexDataServer {
    /// Create a new complex data server.
    pub fn new() -> Self {
        Self {
            prompt_router: Self::prompt_router(),
        }
    }

    #[prompt(
        name = "nested_collections",
        description = "Project report built from nested data structures"
    )]
    async fn nested_collections(
        &self,
        Parameters(args): Parameters<NestedCollectionsArgs>,
    ) -> Result<GetPromptResult, McpError> {
        args.validate().map_err(ArgumentError::from)?;

        tracing::debug!(
            metrics = args.metric_names.len(),
            teams = args.team_leads.len(),
            "rendering nested collections report"
        );
        let teams: Vec<&str> = args.team_leads.keys().map(String::as_str).collect();
        let report = [
            format!("Project: {}", args.project_name),
            format!("Owner: {} ({})", args.owner_username, args.owner_email),
            format!("Roles: {}", args.owner_roles.join(", ")),
            format!("Metrics Tracked: {}", args.metric_names.join(", ")),
            format!("Teams: {}", teams.join(", ")),
        ];
        Ok(user_prompt(
            "Complex nested data project report",
            report.join("\n"),
        ))
    }
}

impl Default for ComplexDataServer {
    fn default() -> Self {
        Self::new()
    }
}

#[prompt_handler]
impl ServerHandler for ComplexDataServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            server_info: Implementation {
                name: "ComplexDataServer".into(),
                title: Some("Walrus MCP Complex Data Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Prompt server taking nested collections. \
                 Argument descriptions end with their type in parentheses."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::{ComplexDataServer, NestedCollectionsArgs};
    use rmcp::{handler::server::wrapper::Parameters, model::PromptMessageContent};
    use serde_json::{Value, json};

    fn args() -> Value {
        json!({
            "project_name": "Walrus",
            "owner_username": "ada",
            "owner_email": "ada@example.com",
            "owner_roles": ["admin", "dev"],
            "owner_preferences": { "theme": ["dark"] },
            "metric_names": ["latency", "errors"],
            "daily_values": [[1.5, 2.0], [0.0, 3.25]],
            "metric_targets": { "latency": 1.0 },
            "team_leads": { "platform": ["grace"], "api": ["linus"] },
            "team_specialties": { "platform": { "infra": ["k8s"] } },
            "team_locations": [{ "city": "Paris" }]
        })
    }

    #[test]
    fn routes_nested_collections() {
        assert!(ComplexDataServer::prompt_router().has_route("nested_collections"));
    }

    #[tokio::test]
    async fn renders_report() {
        let server = ComplexDataServer::new();
        let args: NestedCollectionsArgs = serde_json::from_value(args()).unwrap();
        assert_eq!(args.daily_values[1], [0.0, 3.25]);
        assert_eq!(args.team_specialties["platform"]["infra"], ["k8s"]);

        let result = server.nested_collections(Parameters(args)).await.unwrap();
        let PromptMessageContent::Text { text } = &result.messages[0].content else {
            panic!("expected text content");
        };
        assert_eq!(
            text,
            "Project: Walrus\n\
             Owner: ada (ada@example.com)\n\
             Roles: admin, dev\n\
             Metrics Tracked: latency, errors\n\
             Teams: api, platform"
        );
    }

    #[tokio::test]
    async fn accepts_stringified_collections() {
        let mut raw = args();
        raw["team_locations"] = json!("[{\"city\": \"Oslo\"}]");
        raw["metric_targets"] = json!("{\"errors\": 0.5}");
        let args: NestedCollectionsArgs = serde_json::from_value(raw).unwrap();
        assert_eq!(args.team_locations[0]["city"], "Oslo");
        assert_eq!(args.metric_targets["errors"], 0.5);
    }

    #[tokio::test]
    async fn rejects_bad_owner_email() {
        let server = ComplexDataServer::new();
        let mut raw = args();
        raw["owner_email"] = json!("ada.example.com");
        let args: NestedCollectionsArgs = serde_json::from_value(raw).unwrap();
        let err = server
            .nested_collections(Parameters(args))
            .await
            .unwrap_err();
        assert!(err.message.contains("owner_email (email)"));
    }

    #[tokio::test]
    async fn names_need_one_character_and_have_no_upper_bound() {
        let server = ComplexDataServer::new();

        let mut raw = args();
        raw["project_name"] = json!("p".repeat(500));
        raw["owner_username"] = json!("u".repeat(500));
        let args_ok: NestedCollectionsArgs = serde_json::from_value(raw).unwrap();
        assert!(server.nested_collections(Parameters(args_ok)).await.is_ok());

        let mut raw = args();
        raw["owner_username"] = json!("");
        let args_empty: NestedCollectionsArgs = serde_json::from_value(raw).unwrap();
        let err = server
            .nested_collections(Parameters(args_empty))
            .await
            .unwrap_err();
        assert!(err.message.contains("owner_username (length)"));
    }
}
