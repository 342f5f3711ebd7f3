//! Runtime configuration.
//!
//! Values come from explicit overrides (command-line flags) first and the
//! process environment second. Empty values count as missing. A `.env`
//! file can seed the environment; variables already set are not replaced.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

pub const API_KEY_VAR: &str = "PLANE_API_KEY";
pub const BASE_URL_VAR: &str = "PLANE_BASE_URL";
pub const WORKSPACE_SLUG_VAR: &str = "PLANE_WORKSPACE_SLUG";
pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "HOST";

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} environment variable is required")]
    #[diagnostic(
        code(plane_mcp::config::missing),
        help("Export it in the server's environment or pass the matching command-line flag.")
    )]
    Missing { var: &'static str },

    #[error("Invalid value for {var}: '{value}'")]
    #[diagnostic(code(plane_mcp::config::invalid))]
    Invalid { var: &'static str, value: String },

    #[error("Failed to load env file: {message}")]
    #[diagnostic(code(plane_mcp::config::env_file))]
    EnvFile { message: String },
}

/// Load `.env` from the working directory or its parents, if present.
///
/// Returns the path that was loaded.
pub fn load_env_file() -> ConfigResult<Option<PathBuf>> {
    env_file_outcome(dotenvy::dotenv())
}

/// Load a specific env file, if it exists.
pub fn load_env_file_from(path: &Path) -> ConfigResult<Option<PathBuf>> {
    env_file_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn env_file_outcome(result: dotenvy::Result<PathBuf>) -> ConfigResult<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::EnvFile {
            message: e.to_string(),
        }),
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Connection settings for the Plane REST API.
#[derive(Clone, PartialEq, Eq)]
pub struct PlaneConfig {
    pub api_key: String,
    /// Origin of the Plane instance, without a trailing slash.
    pub base_url: String,
    pub workspace_slug: String,
}

impl PlaneConfig {
    /// Resolve configuration from the environment only.
    pub fn from_env() -> ConfigResult<Self> {
        Self::resolve(None, None, None)
    }

    /// Resolve configuration, preferring explicit values over the environment.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        workspace_slug: Option<String>,
    ) -> ConfigResult<Self> {
        let api_key = required(api_key, API_KEY_VAR)?;
        let base_url = required(base_url, BASE_URL_VAR)?;
        let workspace_slug = required(workspace_slug, WORKSPACE_SLUG_VAR)?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            workspace_slug,
        })
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for PlaneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaneConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("workspace_slug", &self.workspace_slug)
            .finish()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

/// Which MCP transport the server binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout.
    Stdio,
    /// Streamable HTTP (with SSE streaming) on the given address.
    Http(HttpConfig),
}

impl Transport {
    /// Pick the transport: a port (flag or `PORT`) selects HTTP, otherwise stdio.
    pub fn resolve(port: Option<u16>, host: Option<IpAddr>) -> ConfigResult<Self> {
        let port = match port {
            Some(port) => Some(port),
            None => parse_env(PORT_VAR)?,
        };

        let Some(port) = port else {
            return Ok(Transport::Stdio);
        };

        let host = match host {
            Some(host) => host,
            None => parse_env(HOST_VAR)?.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
        };

        Ok(Transport::Http(HttpConfig { host, port }))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(explicit: Option<String>, var: &'static str) -> ConfigResult<String> {
    non_empty(explicit)
        .or_else(|| non_empty(env::var(var).ok()))
        .ok_or(ConfigError::Missing { var })
}

fn parse_env<T: std::str::FromStr>(var: &'static str) -> ConfigResult<Option<T>> {
    match non_empty(env::var(var).ok()) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(None),
    }
}
