//! Doctor module for Rememberizer diagnostic tools
//!
//! Checks the configuration the server would start with and whether the
//! Rememberizer API accepts it.
//!
//! # Usage
//!
//! ```no_run
//! use rememberizer_cli::doctor::Doctor;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut doctor = Doctor::new();
//! let exit_code = doctor.run_diagnostics().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use anyhow::Result;
use colored::*;
use rememberizer::common::EnvLoader;
use rememberizer::config::{DEFAULT_BASE_URL, ENV_PREFIX};
use rememberizer::ClientConfig;

// Re-export types from submodules
pub use types::*;

pub mod checks;
pub mod types;

/// Main diagnostic tool for Rememberizer setup checks
#[derive(Default)]
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all diagnostic checks and print the report.
    ///
    /// The connectivity check only runs when the configuration checks found
    /// no errors.
    pub async fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "Rememberizer Doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        self.run_configuration_checks();
        if self.count(CheckStatus::Error) == 0 {
            let config = ClientConfig::from_env()?;
            checks::check_api_reachable(&mut self.checks, &config).await;
        }

        self.print_results();

        Ok(self.get_exit_code())
    }

    /// The checks collected so far
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    fn run_configuration_checks(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);

        checks::check_api_token(&mut self.checks, loader.load_optional("API_TOKEN").as_deref());
        checks::check_base_url(
            &mut self.checks,
            &loader.load_string("BASE_URL", DEFAULT_BASE_URL),
        );

        let timeouts: Vec<(&str, Option<String>)> = checks::TIMEOUT_VARIABLES
            .iter()
            .map(|name| (*name, std::env::var(name).ok()))
            .collect();
        checks::check_timeouts(&mut self.checks, &timeouts);
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Print the results grouped by category, color-coded by status
    pub fn print_results(&self) {
        let use_color = crate::cli::Cli::should_use_color();

        for category in [CheckCategory::Configuration, CheckCategory::Connectivity] {
            let mut section = self.checks.iter().filter(|c| c.category == category).peekable();
            if section.peek().is_none() {
                continue;
            }

            if use_color {
                println!("{}", category.heading().bold().yellow());
            } else {
                println!("{}", category.heading());
            }
            for check in section {
                print_check(check, use_color);
            }
            println!();
        }

        let (ok, warnings, errors) = (
            self.count(CheckStatus::Ok),
            self.count(CheckStatus::Warning),
            self.count(CheckStatus::Error),
        );
        println!("Summary:");
        if warnings == 0 && errors == 0 {
            println!("  All {ok} checks passed!");
        } else if use_color {
            println!(
                "  {} passed, {} warnings, {} errors",
                ok.to_string().green(),
                warnings.to_string().yellow(),
                errors.to_string().red()
            );
        } else {
            println!("  {ok} passed, {warnings} warnings, {errors} errors");
        }
    }

    /// Exit code for the collected checks: 2 on any error, 1 on any warning, else 0
    pub fn get_exit_code(&self) -> i32 {
        let exit_code = if self.count(CheckStatus::Error) > 0 {
            ExitCode::Error
        } else if self.count(CheckStatus::Warning) > 0 {
            ExitCode::Warning
        } else {
            ExitCode::Success
        };

        exit_code.into()
    }
}

fn print_check(check: &Check, use_color: bool) {
    let symbol = check.status.symbol();

    if use_color {
        let symbol = match check.status {
            CheckStatus::Ok => symbol.green(),
            CheckStatus::Warning => symbol.yellow(),
            CheckStatus::Error => symbol.red(),
        };
        println!("  {} {} - {}", symbol, check.name.bold(), check.message);
        if let Some(fix) = &check.fix {
            println!("    {} {}", "→".dimmed(), fix.dimmed());
        }
    } else {
        println!("  {} {} - {}", symbol, check.name, check.message);
        if let Some(fix) = &check.fix {
            println!("    → {fix}");
        }
    }
}
