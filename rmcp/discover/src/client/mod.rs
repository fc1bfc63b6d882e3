//! MCP client connection handling for stdio and remote transports.

use crate::error::Error;
use rmcp::{
    RoleClient, ServiceExt,
    service::RunningService,
    transport::{TokioChildProcess, streamable_http_client::StreamableHttpClientTransportConfig},
};
use tokio::process::Command;

mod source;

pub use source::PromptSource;

/// Parsed target for connecting to an MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Remote server at the given URL.
    Remote { url: String, auth: Option<String> },
    /// Stdio server launched by a command.
    Stdio { program: String, args: Vec<String> },
}

impl Target {
    /// Parse CLI target arguments into a [`Target`].
    ///
    /// If the first element starts with `http://` or `https://`, treat it as
    /// a remote URL. Otherwise treat the entire vec as a stdio command.
    pub fn parse(target: Vec<String>, auth: Option<String>) -> Result<Self, Error> {
        let (first, rest) = target.split_first().ok_or(Error::NoTarget)?;
        if first.starts_with("http://") || first.starts_with("https://") {
            Ok(Target::Remote {
                url: first.clone(),
                auth,
            })
        } else {
            Ok(Target::Stdio {
                program: first.clone(),
                args: rest.to_vec(),
            })
        }
    }
}

/// Connect to an MCP server and run the initialization handshake.
///
/// A failure here is fatal for a discovery run: no prompt can be reached.
pub async fn connect(target: Target) -> Result<RunningService<RoleClient, ()>, Error> {
    let service = match target {
        Target::Remote { url, auth } => {
            tracing::debug!(%url, "connecting to remote server");
            let config = StreamableHttpClientTransportConfig {
                uri: url.into(),
                ..Default::default()
            };
            let config = if let Some(token) = auth {
                config.auth_header(token)
            } else {
                config
            };
            let transport = rmcp::transport::StreamableHttpClientTransport::from_config(config);
            ().serve(transport).await.map_err(Box::new)?
        }
        Target::Stdio { program, args } => {
            tracing::debug!(%program, ?args, "launching stdio server");
            let mut cmd = Command::new(&program);
            cmd.args(&args);
            let transport = TokioChildProcess::new(cmd)?;
            ().serve(transport).await.map_err(Box::new)?
        }
    };

    if let Some(info) = service.peer_info() {
        tracing::info!(
            server = %info.server_info.name,
            version = %info.server_info.version,
            "session initialized"
        );
    }
    Ok(service)
}
