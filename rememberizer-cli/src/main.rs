use std::process;

use clap::CommandFactory;
use is_terminal::IsTerminal;
use rememberizer_cli::cli::{Cli, Commands, OutputFormat};
use rememberizer_cli::error::handle_cli_result;
use rememberizer_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use rememberizer_cli::logging::{init_logging, Verbosity};
use rememberizer_cli::{completions, doctor, tool_call, tools_list};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Bare invocation prints help without touching logging
    let Some(command) = cli.command else {
        let code = match Cli::command().print_help() {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_WARNING,
        };
        process::exit(code);
    };

    let is_mcp_mode = matches!(command, Commands::Serve) && !std::io::stdin().is_terminal();
    init_logging(
        Verbosity {
            verbose: cli.verbose,
            debug: cli.debug,
            quiet: cli.quiet,
        },
        is_mcp_mode,
    );

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Serving Rememberizer over stdio");
            run_server().await
        }
        Commands::Tools { format } => run_tools(format),
        Commands::Call { tool, args } => {
            tracing::info!("Calling tool {}", tool);
            handle_cli_result(tool_call::run_call_command(tool, args).await)
        }
        Commands::Doctor => {
            tracing::info!("Running doctor");
            run_doctor().await
        }
        Commands::Completion { shell } => {
            tracing::info!("Writing {:?} completion script", shell);
            run_completions(shell)
        }
    };

    process::exit(exit_code);
}

async fn run_server() -> i32 {
    use rememberizer::{ClientConfig, McpServer};
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            eprintln!("Error: {e}");
            return EXIT_ERROR;
        }
    };

    let server = match McpServer::from_config(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Could not build the API client: {}", e);
            return EXIT_WARNING;
        }
    };
    tracing::info!("MCP server initialized for {}", config.base_url);

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Interrupted, shutting down");
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(running_service) => {
            tracing::info!("MCP handshake complete");

            // The client closing stdin ends the session just like Ctrl-C does.
            tokio::select! {
                _ = ct.cancelled() => {}
                quit = running_service.waiting() => {
                    tracing::info!("MCP session ended: {:?}", quit);
                }
            }

            tracing::info!("MCP server stopped");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP handshake failed: {}", e);
            EXIT_WARNING
        }
    }
}

fn run_tools(format: OutputFormat) -> i32 {
    match tools_list::run_tools_command(format) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Tools error: {}", e);
            EXIT_WARNING
        }
    }
}

async fn run_doctor() -> i32 {
    let mut doctor = doctor::Doctor::new();
    match doctor.run_diagnostics().await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Doctor failed: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_completions(shell: clap_complete::Shell) -> i32 {
    match completions::print_completion(shell) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Could not write completion script: {}", e);
            EXIT_WARNING
        }
    }
}
