//! # Rememberizer
//!
//! Model Context Protocol adapter for the Rememberizer knowledge service.
//!
//! ## Features
//!
//! - **HTTP client**: Authenticated JSON requests with uniform error classification
//! - **Canonical URIs**: Stable `rememberizer://` identifiers for documents and discussions
//! - **MCP Support**: Search, listing and memorize tools plus document resources
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rememberizer::{ApiClient, ClientConfig};
//!
//! # async fn run() -> rememberizer::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//!
//! let account = client.get("account/", &[]).await?;
//! println!("{account}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Authenticated HTTP client for the remote API
pub mod client;

/// Shared helpers
pub mod common;

/// Client configuration
pub mod config;

/// Remote API paths
pub mod endpoints;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Canonical resource identifiers
pub mod uri;

// Re-export core types
pub use client::ApiClient;
pub use config::{ClientConfig, TimeoutConfig};
pub use error::{ApiError, ConfigError, HttpMethod, RememberizerError, Result};
pub use mcp::McpServer;
pub use uri::{document_uri, DocumentRecord, ResourceUri};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mcp::{McpServer, RememberizerTool};
    pub use crate::{
        document_uri, ApiClient, ApiError, ClientConfig, DocumentRecord, RememberizerError,
        ResourceUri, Result, TimeoutConfig,
    };
}
