//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::server::PlaneMcpServer;
use crate::plane::PlaneClient;

/// Create MCP Streamable HTTP service
///
/// Each session gets its own [`PlaneMcpServer`]; all of them share `client`.
/// Session bookkeeping (creation on initialize, removal on close) is handled
/// by rmcp's `LocalSessionManager`. Sessions are not expired on idle.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use plane_mcp::config::PlaneConfig;
/// # use plane_mcp::mcp::create_mcp_service;
/// # use plane_mcp::plane::PlaneClient;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let config = PlaneConfig::from_env()?;
/// let client = Arc::new(PlaneClient::new(&config)?);
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(client, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: Arc<PlaneClient>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<PlaneMcpServer, LocalSessionManager> {
    // Service factory: creates new PlaneMcpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<PlaneMcpServer, std::io::Error> {
        Ok(PlaneMcpServer::new(Arc::clone(&client)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
