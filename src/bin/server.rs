//! Plane MCP server binary.
//!
//! Configuration is validated before any transport starts; a missing
//! credential stops the process here rather than on the first tool call.

use std::net::IpAddr;
use std::sync::Arc;

use clap::Parser;
use miette::Diagnostic;
use plane_mcp::config::{self, ConfigError, PlaneConfig, Transport};
use plane_mcp::plane::{PlaneClient, PlaneError};
use plane_mcp::serve::{self, ServeError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(plane_mcp::binary::config))]
    Config(#[from] ConfigError),

    #[error("Plane client error: {0}")]
    #[diagnostic(code(plane_mcp::binary::client))]
    Client(#[from] PlaneError),

    #[error("Server error: {0}")]
    #[diagnostic(code(plane_mcp::binary::serve))]
    Serve(#[from] ServeError),
}

#[derive(Parser)]
#[command(name = "plane-mcp")]
#[command(author, version, about = "MCP server for the Plane project-management API", long_about = None)]
struct Cli {
    /// Plane API key (default: PLANE_API_KEY env)
    #[arg(long)]
    api_key: Option<String>,

    /// Plane base URL, e.g. https://api.plane.so (default: PLANE_BASE_URL env)
    #[arg(long)]
    base_url: Option<String>,

    /// Workspace slug (default: PLANE_WORKSPACE_SLUG env)
    #[arg(long)]
    workspace_slug: Option<String>,

    /// Serve Streamable HTTP on this port instead of stdio (default: PORT env)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host address to bind to in HTTP mode (default: HOST env or 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let env_file = config::load_env_file().map_err(BinaryError::from)?;
    serve::init_tracing();
    if let Some(path) = env_file {
        debug!(path = %path.display(), "Loaded env file");
    }

    run(cli).await?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let plane = PlaneConfig::resolve(cli.api_key, cli.base_url, cli.workspace_slug)?;
    let transport = Transport::resolve(cli.port, cli.host)?;

    let _ = rustls::crypto::ring::default_provider().install_default();
    let client = Arc::new(PlaneClient::new(&plane)?);
    info!(
        base_url = client.base_url(),
        workspace = client.workspace_slug(),
        "Plane client configured"
    );

    match transport {
        Transport::Stdio => serve::run_stdio(client).await?,
        Transport::Http(config) => serve::run_http(config, client).await?,
    }

    Ok(())
}
