//! Unified error handling for the Rememberizer library
//!
//! Every failure of the remote API is funnelled into [`ApiError`]; everything
//! else the library can report is wrapped by [`RememberizerError`].

use std::fmt;
use thiserror::Error;

/// Result type alias for Rememberizer operations
pub type Result<T> = std::result::Result<T, RememberizerError>;

/// HTTP method of a failed request, kept for error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
}

impl HttpMethod {
    /// Verb phrase used in user-facing messages ("fetch", "post to")
    pub fn action(&self) -> &'static str {
        match self {
            HttpMethod::Get => "fetch",
            HttpMethod::Post => "post to",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Failure of a call to the remote Rememberizer API
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never completed: DNS, refused connection, TLS, timeout or reset
    #[error("Failed to {} {path}. Connection error.", .method.action())]
    ConnectionFailure {
        /// Method of the failed request
        method: HttpMethod,
        /// Path relative to the API base URL
        path: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered 401
    #[error("Error: Unauthorized. Please check your REMEMBERIZER API token")]
    Unauthorized,

    /// The server answered with a non-2xx status other than 401
    #[error("Failed to {} {path}. Status: {status}", .method.action())]
    StatusFailure {
        /// Method of the failed request
        method: HttpMethod,
        /// Path relative to the API base URL
        path: String,
        /// HTTP status code received
        status: u16,
    },

    /// The server answered 2xx but the body was not valid JSON
    #[error("Invalid JSON response from {path}: {source}")]
    InvalidResponse {
        /// Path relative to the API base URL
        path: String,
        /// Underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApiError {
    /// Status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::StatusFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error points at a credential problem
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Errors that can occur while building configuration or the client
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No API token was supplied
    #[error("Missing API token: set {variable} to your Rememberizer API token")]
    MissingToken {
        /// Environment variable that should hold the token
        variable: String,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field
        field: String,
        /// The offending value
        value: String,
        /// Hint about how to fix it
        hint: String,
    },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// The main error type for the Rememberizer library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RememberizerError {
    /// Remote API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration was invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A `rememberizer://` URI could not be parsed
    #[error("Invalid resource URI '{uri}': {reason}")]
    InvalidUri {
        /// The URI as received
        uri: String,
        /// Why it was rejected
        reason: String,
    },

    /// Tool arguments failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
