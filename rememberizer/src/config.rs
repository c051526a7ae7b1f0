//! Configuration management for the Rememberizer adapter
//!
//! Configuration is read from the environment once at process entry and then
//! passed by reference to [`crate::client::ApiClient::new`]. Nothing here is
//! global or mutable after construction.

use crate::common::env_loader::EnvLoader;
use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

/// Prefix shared by every environment variable the adapter reads
pub const ENV_PREFIX: &str = "REMEMBERIZER";

/// Public Rememberizer API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.rememberizer.ai/api/v1/";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 60;
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;

/// Largest accepted value for any timeout axis, one day
pub const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Timeout budget of an HTTP call, one field per phase.
///
/// The axes are kept apart because reading a large document legitimately
/// takes much longer than a connect handshake or a request write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Time allowed to establish a TCP/TLS connection
    pub connect: Duration,
    /// Time allowed between reads of the response
    pub read: Duration,
    /// Time allowed to write the request
    pub write: Duration,
    /// Time allowed to acquire a connection from the pool
    pub pool: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
            pool: Duration::from_secs(DEFAULT_POOL_TIMEOUT_SECS),
        }
    }
}

impl TimeoutConfig {
    /// Upper bound for everything up to and including the response head
    pub fn send_budget(&self) -> Duration {
        self.pool
            .saturating_add(self.connect)
            .saturating_add(self.write)
            .saturating_add(self.read)
    }

    /// Every axis limited to [`MAX_TIMEOUT_SECS`].
    ///
    /// The HTTP stack adds timeouts to the current instant, which overflows for
    /// values near `u64::MAX` seconds.
    pub fn capped(self) -> Self {
        let cap = Duration::from_secs(MAX_TIMEOUT_SECS);
        Self {
            connect: self.connect.min(cap),
            read: self.read.min(cap),
            write: self.write.min(cap),
            pool: self.pool.min(cap),
        }
    }

    fn apply_env_vars(&mut self, loader: &EnvLoader) {
        self.connect = Duration::from_secs(
            loader.load_parsed("CONNECT_TIMEOUT_SECS", self.connect.as_secs()),
        );
        self.read =
            Duration::from_secs(loader.load_parsed("READ_TIMEOUT_SECS", self.read.as_secs()));
        self.write =
            Duration::from_secs(loader.load_parsed("WRITE_TIMEOUT_SECS", self.write.as_secs()));
        self.pool =
            Duration::from_secs(loader.load_parsed("POOL_TIMEOUT_SECS", self.pool.as_secs()));
    }
}

/// Connection settings for the remote API
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL; always ends with `/`
    pub base_url: String,
    /// Token sent with every request
    pub api_token: String,
    /// Per-phase timeouts
    pub timeouts: TimeoutConfig,
}

// The token never reaches logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] for a blank token and
    /// [`ConfigError::InvalidValue`] when `base_url` is not an absolute http(s) URL.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken {
                variable: format!("{ENV_PREFIX}_API_TOKEN"),
            });
        }

        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            api_token,
            timeouts: TimeoutConfig::default(),
        })
    }

    /// Replace the timeout budget, capping each axis at [`MAX_TIMEOUT_SECS`]
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts.capped();
        self
    }

    /// Load the configuration from `REMEMBERIZER_*` environment variables.
    ///
    /// `REMEMBERIZER_API_TOKEN` is required; the base URL and the four
    /// timeouts fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let api_token = loader
            .load_optional("API_TOKEN")
            .ok_or_else(|| ConfigError::MissingToken {
                variable: loader.key("API_TOKEN"),
            })?;
        let base_url = loader.load_string("BASE_URL", DEFAULT_BASE_URL);

        let mut timeouts = TimeoutConfig::default();
        timeouts.apply_env_vars(&loader);

        let config = Self::new(base_url, api_token)?.with_timeouts(timeouts);
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Validate a base URL and make sure relative paths join underneath it.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] unless `raw` is an absolute http(s) URL.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |hint: &str| ConfigError::InvalidValue {
        field: "base_url".to_string(),
        value: raw.to_string(),
        hint: hint.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&format!("Hint: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("Hint: the base URL must use http or https"));
    }

    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
