//! MCP server for the Plane project-management API.
//!
//! - [`plane`]: typed REST client
//! - [`mcp`]: tool catalog, dispatcher and MCP server handler
//! - [`serve`]: stdio and Streamable HTTP bindings
//! - [`config`]: environment and command-line configuration

pub mod config;
pub mod mcp;
pub mod plane;
pub mod serve;

#[cfg(test)]
mod test_support;
