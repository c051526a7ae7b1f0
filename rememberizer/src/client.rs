//! HTTP client for the Rememberizer API
//!
//! [`ApiClient`] performs authenticated GET/POST calls against one base URL and
//! reduces every failure to an [`ApiError`]:
//!
//! 1. the request does not complete (DNS, refusal, timeout, reset) → `ConnectionFailure`
//! 2. status 401 → `Unauthorized`, checked before any other status handling
//! 3. any other non-2xx status → `StatusFailure`
//! 4. 2xx → the body decoded as JSON, or `InvalidResponse` if it is not JSON
//!
//! The client is cheap to share behind an `Arc`; concurrent calls only meet in
//! `reqwest`'s connection pool.

use crate::config::{ClientConfig, TimeoutConfig};
use crate::error::{ApiError, ConfigError, HttpMethod};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "public-ck-id";

/// Query parameters appended to a request URL
pub type QueryParams<'a> = [(&'a str, String)];

/// Authenticated client for the Rememberizer REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeouts: TimeoutConfig,
}

impl ApiClient {
    /// Build a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the token cannot be sent as a
    /// header or the base URL does not parse, and [`ConfigError::Client`] when
    /// the underlying transport cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: config.base_url.clone(),
            hint: format!("Hint: {e}"),
        })?;

        let mut token = HeaderValue::from_str(&config.api_token).map_err(|_| {
            ConfigError::InvalidValue {
                field: "api_token".to_string(),
                value: "<redacted>".to_string(),
                hint: "Hint: the token must be printable ASCII without line breaks".to_string(),
            }
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(AUTH_HEADER), token);

        let timeouts = config.timeouts.capped();
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("rememberizer-mcp/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self {
            http,
            base_url,
            timeouts,
        })
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Timeout budget this client was built with
    pub fn timeouts(&self) -> &TimeoutConfig {
        &self.timeouts
    }

    /// GET `path` with optional query parameters and decode the JSON body.
    pub async fn get(&self, path: &str, query: &QueryParams<'_>) -> Result<Value, ApiError> {
        tracing::debug!("Fetching {}", path);
        let url = self.resolve(HttpMethod::Get, path)?;
        let request = self.http.get(url).query(query);
        self.execute(HttpMethod::Get, path, request).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post<B>(
        &self,
        path: &str,
        body: &B,
        query: &QueryParams<'_>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("Posting to {}", path);
        let url = self.resolve(HttpMethod::Post, path)?;
        let request = self.http.post(url).query(query).json(body);
        self.execute(HttpMethod::Post, path, request).await
    }

    /// Resolve `path` underneath the base URL, keeping any query it carries
    fn resolve(&self, method: HttpMethod, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Self::connection_failure(method, path, e))
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ApiError> {
        // reqwest has no write or pool-checkout timeout, so the whole send phase
        // is bounded by the sum of the four budgets.
        let response =
            match tokio::time::timeout(self.timeouts.send_budget(), request.send()).await {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => return Err(Self::connection_failure(method, path, e)),
                Err(elapsed) => return Err(Self::connection_failure(method, path, elapsed)),
            };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::error!("HTTP 401 error while {} {}: unauthorized", method, path);
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            tracing::error!(
                "HTTP {} error while {} {}",
                status.as_u16(),
                method,
                path
            );
            return Err(ApiError::StatusFailure {
                method,
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::connection_failure(method, path, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Invalid JSON response from {} {}: {}", method, path, e);
            ApiError::InvalidResponse {
                path: path.to_string(),
                source: Box::new(e),
            }
        })
    }

    fn connection_failure<E>(method: HttpMethod, path: &str, error: E) -> ApiError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        tracing::error!("Connection error while {} {}: {}", method, path, error);
        ApiError::ConnectionFailure {
            method,
            path: path.to_string(),
            source: Box::new(error),
        }
    }
}
