//! Tracing setup for the CLI
//!
//! An MCP client owns stdout and usually swallows stderr, so in serve mode the
//! log goes to `~/.rememberizer/mcp.log` instead.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Directory under the home directory holding the MCP log
pub const LOG_DIR_NAME: &str = ".rememberizer";

/// Default MCP log file name
pub const DEFAULT_LOG_FILE: &str = "mcp.log";

/// Environment variable overriding the MCP log file name
pub const LOG_FILE_ENV: &str = "REMEMBERIZER_LOG_FILE";

/// Verbosity flags as given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbosity {
    pub verbose: bool,
    pub debug: bool,
    pub quiet: bool,
}

impl Verbosity {
    /// Level selected by the flags; `--quiet` wins over the others
    pub fn level(&self, is_mcp_mode: bool) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::TRACE
        } else if self.debug || is_mcp_mode {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Path of the MCP log file
pub fn mcp_log_path() -> PathBuf {
    let log_dir = dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_DIR_NAME));

    let file_name = std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    log_dir.join(file_name)
}

/// Install the global subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(verbosity: Verbosity, is_mcp_mode: bool) {
    let level = verbosity.level(is_mcp_mode);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    if is_mcp_mode {
        match open_log_file() {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file, using stderr: {e}");
            }
        }
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn open_log_file() -> io::Result<File> {
    let path = mcp_log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Writer that flushes every record so the log is readable while the server runs.
///
/// Clones share one file handle; each write holds the lock for the whole record.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Wrap a shared file handle
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, File>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock()?;
        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.flush()
    }
}
