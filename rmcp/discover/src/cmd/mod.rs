//! Command-line interface for discovering MCP server prompts.

use crate::{
    client::{PromptSource, Target, connect},
    discover::discover,
    error::Error,
};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

/// Discover MCP server prompts and synthesize typed argument models.
#[derive(Parser, Debug)]
#[command(name = "rmcp-discover", version, about)]
pub struct App {
    /// Target MCP server: a URL (http/https) for remote servers,
    /// or a command for stdio servers.
    ///
    /// Use `--` before commands with flags:
    ///   rmcp-discover -- wmcp-prompts echo discover
    #[arg(required = true, num_args = 1..)]
    pub target: Vec<String>,

    /// Bearer token for authenticating with remote servers.
    #[arg(long = "auth", value_name = "TOKEN")]
    pub auth: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List prompts exposed by the server as raw JSON.
    Prompts,
    /// Print a synthesized model and an example payload for every prompt.
    Discover,
}

impl App {
    /// Parse CLI arguments and execute the corresponding command.
    pub async fn run() -> Result<(), Error> {
        let app = App::parse();
        let target = Target::parse(app.target, app.auth)?;
        let service = connect(target).await?;

        match app.command {
            Command::Prompts => {
                let prompts = service.list_prompts().await?;
                println!("{}", serde_json::to_string_pretty(&prompts)?);
            }
            Command::Discover => {
                let cancel = CancellationToken::new();
                let on_interrupt = cancel.clone();
                tokio::spawn(async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        on_interrupt.cancel();
                    }
                });

                let reports = discover(&service, &cancel).await;
                cancel.cancel();
                let reports = reports?;
                let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
                println!("Server Prompts: {names:?}");
                for report in &reports {
                    println!("{report}\n");
                }
            }
        }

        service.cancel().await.ok();
        Ok(())
    }
}
