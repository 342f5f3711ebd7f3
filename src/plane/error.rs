use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PlaneError {
    #[error("Failed to connect to Plane API: {source}")]
    #[diagnostic(
        code(plane_mcp::plane::connection_failed),
        help("Check PLANE_BASE_URL and that the Plane instance is reachable.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    #[diagnostic(code(plane_mcp::plane::client_build))]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from Plane API: {message}")]
    #[diagnostic(code(plane_mcp::plane::invalid_response))]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(plane_mcp::plane::api_error))]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for PlaneError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            PlaneError::ConnectionFailed { source: e }
        } else {
            PlaneError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for PlaneError {
    fn from(e: serde_json::Error) -> Self {
        PlaneError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type PlaneResult<T> = Result<T, PlaneError>;
