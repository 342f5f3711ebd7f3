//! Transport bindings and process-level setup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, routing::get};
use miette::Diagnostic;
use rmcp::ServiceExt;
use serde_json::{Value, json};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HttpConfig;
use crate::mcp::{PlaneMcpServer, create_mcp_service};
use crate::plane::PlaneClient;

#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Failed to start MCP session: {message}")]
    #[diagnostic(code(plane_mcp::serve::initialize))]
    Initialize { message: String },

    #[error("MCP session task failed: {0}")]
    #[diagnostic(code(plane_mcp::serve::join))]
    Join(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(plane_mcp::serve::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
///
/// Logs go to stderr; stdout is reserved for the stdio transport.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plane_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Serve MCP over stdin/stdout until the peer disconnects
pub async fn run_stdio(client: Arc<PlaneClient>) -> Result<(), ServeError> {
    let running = PlaneMcpServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServeError::Initialize {
            message: e.to_string(),
        })?;
    info!("Plane MCP server running on stdio");

    let reason = running.waiting().await?;
    info!(?reason, "MCP session closed");
    Ok(())
}

/// Build the HTTP router: MCP at `/mcp`, liveness at `/health`
///
/// Every route answers CORS requests from any origin so browser-based MCP
/// hosts can connect.
pub fn router(client: Arc<PlaneClient>, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", create_mcp_service(client, cancellation_token))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve MCP over Streamable HTTP until Ctrl-C
pub async fn run_http(config: HttpConfig, client: Arc<PlaneClient>) -> Result<(), ServeError> {
    let ct = CancellationToken::new();
    let app = router(client, ct.clone());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Plane MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
            ct.cancel();
        })
        .await?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
