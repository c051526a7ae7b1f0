//! Type definitions for the doctor module

/// Status of a diagnostic check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed without issues
    Ok,
    /// Check passed but with potential issues
    Warning,
    /// Check failed with errors
    Error,
}

impl CheckStatus {
    /// Symbol printed in front of the check
    pub fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        }
    }
}

/// Which section of the report a check is printed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    /// Environment variables and derived settings
    Configuration,
    /// Reaching the remote API
    Connectivity,
}

impl CheckCategory {
    /// Section heading in the report
    pub fn heading(&self) -> &'static str {
        match self {
            CheckCategory::Configuration => "Configuration:",
            CheckCategory::Connectivity => "Connectivity:",
        }
    }
}

/// Exit codes for the doctor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// Warnings detected
    Warning = 1,
    /// Errors detected
    Error = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Result of a single diagnostic check
///
/// ```
/// use rememberizer_cli::doctor::{Check, CheckCategory, CheckStatus};
///
/// let check = Check::error("API token", CheckCategory::Configuration, "not set")
///     .with_fix("export REMEMBERIZER_API_TOKEN=<token>");
/// assert_eq!(check.status, CheckStatus::Error);
/// ```
#[derive(Debug, Clone)]
pub struct Check {
    /// Name of the check performed
    pub name: String,
    /// Report section
    pub category: CheckCategory,
    /// Outcome
    pub status: CheckStatus,
    /// What was found
    pub message: String,
    /// How to fix a warning or error
    pub fix: Option<String>,
}

impl Check {
    fn with_status(
        name: impl Into<String>,
        category: CheckCategory,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            status,
            message: message.into(),
            fix: None,
        }
    }

    /// A passing check
    pub fn ok(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::with_status(name, category, CheckStatus::Ok, message)
    }

    /// A check that found a potential issue
    pub fn warning(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::with_status(name, category, CheckStatus::Warning, message)
    }

    /// A failing check
    pub fn error(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
    ) -> Self {
        Self::with_status(name, category, CheckStatus::Error, message)
    }

    /// Attach a fix suggestion
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}
