//! Error handling for the Rememberizer CLI
//!
//! Errors keep their source chain for display and carry the exit code the
//! process should end with.

use crate::exit_codes::{EXIT_ERROR, EXIT_WARNING};
use rememberizer::{ApiError, RememberizerError};
use std::error::Error;
use std::fmt;

/// Result of a CLI command
pub type CliResult<T> = Result<T, CliError>;

/// A failed command: what to print and which exit code to end with
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Error with no underlying cause
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Wrap `error`, keeping it as the source
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        Self {
            message: error.to_string(),
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Runtime failure, exit code 1
    pub fn general<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_WARNING)
    }

    /// Bad configuration or credentials, exit code 2
    pub fn configuration<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_ERROR)
    }

    /// The message followed by one `Caused by:` line per nested source
    pub fn full_chain(&self) -> String {
        let mut chain = self.message.clone();
        let mut cause = self.source();
        while let Some(err) = cause {
            chain.push_str(&format!("\n  Caused by: {err}"));
            cause = err.source();
        }
        chain
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().and_then(|e| e.source())
    }
}

/// Credential and configuration problems end the process with code 2,
/// everything else with code 1.
impl From<RememberizerError> for CliError {
    fn from(error: RememberizerError) -> Self {
        match &error {
            RememberizerError::Config(_)
            | RememberizerError::Api(ApiError::Unauthorized) => Self::configuration(error),
            _ => Self::general(error),
        }
    }
}

/// Exit code for `result`; errors are printed to stderr with their causes
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rememberizer::{ConfigError, HttpMethod};

    #[test]
    fn test_missing_token_is_configuration_error() {
        let error: CliError = RememberizerError::from(ConfigError::MissingToken {
            variable: "REMEMBERIZER_API_TOKEN".to_string(),
        })
        .into();
        assert_eq!(error.exit_code, EXIT_ERROR);
        assert!(error.message.contains("REMEMBERIZER_API_TOKEN"));
    }

    #[test]
    fn test_unauthorized_is_configuration_error() {
        let error: CliError = RememberizerError::from(ApiError::Unauthorized).into();
        assert_eq!(error.exit_code, EXIT_ERROR);
    }

    #[test]
    fn test_status_failure_is_general_error() {
        let error: CliError = RememberizerError::from(ApiError::StatusFailure {
            method: HttpMethod::Get,
            path: "account/".to_string(),
            status: 503,
        })
        .into();
        assert_eq!(error.exit_code, EXIT_WARNING);
        assert_eq!(error.message, "Failed to fetch account/. Status: 503");
    }

    #[test]
    fn test_full_chain_without_source() {
        let error = CliError::new("plain failure", EXIT_WARNING);
        assert_eq!(error.full_chain(), "plain failure");
        assert_eq!(handle_cli_result::<()>(Err(error)), EXIT_WARNING);
    }
}
