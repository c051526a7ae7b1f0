use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rememberizer")]
#[command(version)]
#[command(about = "An MCP server for searching and storing Rememberizer knowledge")]
#[command(long_about = "
rememberizer is an MCP (Model Context Protocol) server that gives AI
assistants access to personal and team knowledge stored in Rememberizer.

The API token is read from REMEMBERIZER_API_TOKEN.

Example usage:
  rememberizer serve     # Run as MCP server
  rememberizer doctor    # Check configuration and connectivity
  rememberizer completion bash > ~/.bashrc.d/rememberizer  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs rememberizer as an MCP server on stdin/stdout. The server exposes:

- Semantic and agentic search over your knowledge
- Document and integration listings
- A memorize tool for storing new information
- Every document as a rememberizer:// resource

When stdin is not a terminal, logs go to ~/.rememberizer/mcp.log
(override the file name with REMEMBERIZER_LOG_FILE).

Example:
  rememberizer serve
")]
    Serve,
    /// List the MCP tools this server exposes
    #[command(long_about = "
Lists the tools exposed over MCP with their descriptions.

Output formats:
  table  - Formatted table (default)
  json   - Names, descriptions and input schemas for scripting

Examples:
  rememberizer tools
  rememberizer tools --format json
")]
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Call one MCP tool and print its result
    #[command(long_about = "
Executes a single tool against the Rememberizer API without an MCP client,
which is useful for checking what an assistant will see.

Arguments are passed as a JSON object.

Examples:
  rememberizer call rememberizer_account_information
  rememberizer call retrieve_semantically_similar_internal_knowledge --args '{\"match_this\": \"release process\"}'
  rememberizer call remember_this --args '{\"name\": \"Standup\", \"content\": \"Ship on Friday\"}'
")]
    Call {
        /// Name of the tool to call
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Checks the API token, the base URL, the timeout settings and whether the
Rememberizer API accepts the token.

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  rememberizer doctor
")]
    Doctor,
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.

Examples:
  # Bash (add to ~/.bashrc or ~/.bash_profile)
  rememberizer completion bash > ~/.local/share/bash-completion/completions/rememberizer

  # Zsh (add to ~/.zshrc or a file in fpath)
  rememberizer completion zsh > ~/.zfunc/_rememberizer

  # Fish
  rememberizer completion fish > ~/.config/fish/completions/rememberizer.fish
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let result = Cli::try_parse_from_args(["rememberizer", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from_args(["rememberizer"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve_with_global_flags() {
        let cli = Cli::try_parse_from_args(["rememberizer", "serve", "--debug"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_tools_format() {
        let cli = Cli::try_parse_from_args(["rememberizer", "tools"]).unwrap();
        match cli.command {
            Some(Commands::Tools { format }) => assert_eq!(format, OutputFormat::Table),
            other => panic!("expected tools command, got {other:?}"),
        }

        let cli =
            Cli::try_parse_from_args(["rememberizer", "tools", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Tools { format }) => assert_eq!(format, OutputFormat::Json),
            other => panic!("expected tools command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_call_with_args() {
        let cli = Cli::try_parse_from_args([
            "rememberizer",
            "call",
            "remember_this",
            "--args",
            r#"{"name": "n", "content": "c"}"#,
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Call { tool, args }) => {
                assert_eq!(tool, "remember_this");
                assert_eq!(args.as_deref(), Some(r#"{"name": "n", "content": "c"}"#));
            }
            other => panic!("expected call command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_call_requires_tool() {
        let result = Cli::try_parse_from_args(["rememberizer", "call"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_completion_rejects_unknown_shell() {
        let result = Cli::try_parse_from_args(["rememberizer", "completion", "tcsh"]);
        assert!(result.is_err());
    }
}
