//! MCP server implementation
//!
//! Implements `ServerHandler` directly rather than through the tool-router
//! macros: `tools/list` serves the static catalog and `tools/call` goes
//! through [`Dispatcher`], which owns name normalization and argument
//! validation.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use super::dispatch::Dispatcher;
use super::tools;
use crate::plane::PlaneClient;

pub const SERVER_NAME: &str = "plane-mcp-server";

/// Plane MCP server
///
/// Cheap to clone; every clone shares the same client.
#[derive(Clone)]
pub struct PlaneMcpServer {
    dispatcher: Dispatcher,
}

impl PlaneMcpServer {
    /// Create a new MCP server around an already configured client
    pub fn new(client: Arc<PlaneClient>) -> Self {
        Self {
            dispatcher: Dispatcher::new(client),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for PlaneMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(
            "Plane MCP Server - Browse workspaces, projects, states, cycles and modules; \
             list, create, update and delete issues; read and add issue comments"
                .to_string(),
        );
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(tools::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatcher
            .dispatch(&request.name, request.arguments)
            .await)
    }
}
