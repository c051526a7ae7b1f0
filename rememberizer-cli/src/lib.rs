//! Rememberizer CLI Library
//!
//! Command-line definitions, diagnostics and the glue between the binary and
//! the `rememberizer` MCP server.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Shell completion generation
pub mod completions;
/// Configuration and connectivity diagnostics
pub mod doctor;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tracing subscriber setup
pub mod logging;
/// Running a single tool from the command line
pub mod tool_call;
/// Listing the exposed tools
pub mod tools_list;
