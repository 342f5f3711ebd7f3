//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Plane API as MCP tools over stdio or Streamable HTTP.
//!
//! # Architecture
//!
//! - **tools**: static catalog of tool names, descriptions and input schemas
//! - **dispatch**: validates arguments and routes one tool call to one client method
//! - **server**: `ServerHandler` that serves the catalog and delegates calls
//! - **service**: Streamable HTTP binding for mounting in an Axum router
//!
//! Both transports share the same server type; only the binding differs.

mod dispatch;
pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod service_test;

pub use dispatch::{DispatchError, DispatchResult, Dispatcher};
pub use server::PlaneMcpServer;
pub use service::create_mcp_service;
pub use tools::ToolName;
