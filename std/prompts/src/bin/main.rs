//! Binary entry point for the wmcp-prompts MCP servers.

use clap::{Parser, Subcommand};
use rmcp::{ServerHandler, ServiceExt};
use wmcp_prompts::{ComplexDataServer, EchoPromptServer};

/// Walrus MCP Prompt Servers: example prompts with typed arguments.
#[derive(Parser)]
#[command(name = "wmcp-prompts", version, about)]
struct Cli {
    #[command(subcommand)]
    server: Server,
}

#[derive(Subcommand)]
enum Server {
    /// Subscription messages and project reports.
    Echo,
    /// A project report taking nested collections.
    ComplexData,
}

async fn serve<S: ServerHandler>(server: S) {
    let transport = rmcp::transport::stdio();
    server
        .serve(transport)
        .await
        .expect("failed to start server")
        .waiting()
        .await
        .expect("server error");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
    match cli.server {
        Server::Echo => serve(EchoPromptServer::new()).await,
        Server::ComplexData => serve(ComplexDataServer::new()).await,
    }
}
