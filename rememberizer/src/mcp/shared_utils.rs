//! Shared utilities for MCP operations
//!
//! Error mapping, argument validation and response formatting used by every
//! tool and by the resource handlers.

use crate::error::ApiError;
use crate::{RememberizerError, Result};
use rmcp::Error as McpError;
use serde_json::Value;

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a library error into an MCP error.
    ///
    /// - bad credentials and bad input -> invalid_request / invalid_params
    /// - remote and system failures -> internal_error
    ///
    /// The message always keeps the path and status so a user can tell a
    /// credential problem from a network or server-side one.
    pub fn handle_error(error: RememberizerError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            RememberizerError::Api(ApiError::Unauthorized) => {
                McpError::invalid_request(ApiError::Unauthorized.to_string(), None)
            }
            RememberizerError::Api(err) => McpError::internal_error(err.to_string(), None),
            RememberizerError::Validation(msg) => McpError::invalid_params(msg, None),
            RememberizerError::InvalidUri { uri, reason } => {
                McpError::invalid_params(format!("Invalid resource URI '{uri}': {reason}"), None)
            }
            RememberizerError::Config(err) => {
                McpError::internal_error(format!("Configuration error: {err}"), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        }
    }

    /// Handle results with consistent error mapping
    pub fn handle_result<T>(
        result: Result<T>,
        operation: &str,
    ) -> std::result::Result<T, McpError> {
        result.map_err(|e| Self::handle_error(e, operation))
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(RememberizerError::Validation(format!(
                "{field} cannot be empty"
            )));
        }
        Ok(())
    }

    /// Validate a number lies in `min..=max`
    pub fn validate_range(value: u32, field: &str, min: u32, max: u32) -> Result<()> {
        if !(min..=max).contains(&value) {
            return Err(RememberizerError::Validation(format!(
                "{field} must be between {min} and {max}, got {value}"
            )));
        }
        Ok(())
    }
}

/// Formatting helpers for tool output
pub struct McpFormatter;

impl McpFormatter {
    /// Render a JSON payload for an MCP text response
    pub fn format_json(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    /// Render a titled JSON payload
    pub fn format_titled(title: &str, value: &Value) -> String {
        format!("{title}:\n{}", Self::format_json(value))
    }
}
