//! Individual diagnostic checks
//!
//! Each check takes its inputs explicitly and pushes one [`Check`].

use super::types::{Check, CheckCategory};
use rememberizer::config::{normalize_base_url, MAX_TIMEOUT_SECS};
use rememberizer::endpoints::ACCOUNT_INFORMATION_PATH;
use rememberizer::{ApiClient, ApiError, ClientConfig};

/// Timeout variables checked for parseability
pub const TIMEOUT_VARIABLES: [&str; 4] = [
    "REMEMBERIZER_CONNECT_TIMEOUT_SECS",
    "REMEMBERIZER_READ_TIMEOUT_SECS",
    "REMEMBERIZER_WRITE_TIMEOUT_SECS",
    "REMEMBERIZER_POOL_TIMEOUT_SECS",
];

const CONFIGURATION: CheckCategory = CheckCategory::Configuration;
const CONNECTIVITY: CheckCategory = CheckCategory::Connectivity;

/// Check that an API token is configured
pub fn check_api_token(checks: &mut Vec<Check>, token: Option<&str>) {
    let check = match token {
        Some(token) if !token.trim().is_empty() => Check::ok(
            "API token",
            CONFIGURATION,
            format!("REMEMBERIZER_API_TOKEN is set ({} characters)", token.len()),
        ),
        _ => Check::error("API token", CONFIGURATION, "REMEMBERIZER_API_TOKEN is not set")
            .with_fix("Create a token in Rememberizer and export REMEMBERIZER_API_TOKEN=<token>"),
    };
    checks.push(check);
}

/// Check that the base URL is an absolute http(s) URL
pub fn check_base_url(checks: &mut Vec<Check>, base_url: &str) {
    let check = match normalize_base_url(base_url) {
        Ok(normalized) => Check::ok("Base URL", CONFIGURATION, normalized),
        Err(e) => Check::error("Base URL", CONFIGURATION, e.to_string()).with_fix(
            "Unset REMEMBERIZER_BASE_URL or point it at https://api.rememberizer.ai/api/v1/",
        ),
    };
    checks.push(check);
}

/// Check that every timeout variable that is set parses as whole seconds
/// within [`MAX_TIMEOUT_SECS`].
///
/// `values` pairs each variable with its raw value, if set.
pub fn check_timeouts(checks: &mut Vec<Check>, values: &[(&str, Option<String>)]) {
    let mut invalid = Vec::new();
    let mut capped = Vec::new();
    for (name, value) in values {
        let Some(raw) = value else { continue };
        match raw.trim().parse::<u64>() {
            Err(_) => invalid.push(*name),
            Ok(secs) if secs > MAX_TIMEOUT_SECS => capped.push(*name),
            Ok(_) => {}
        }
    }

    let check = if !invalid.is_empty() {
        Check::warning(
            "Timeouts",
            CONFIGURATION,
            format!(
                "{} not a whole number of seconds, using the default",
                invalid.join(", ")
            ),
        )
        .with_fix("Set timeouts as integers, e.g. REMEMBERIZER_READ_TIMEOUT_SECS=60")
    } else if !capped.is_empty() {
        Check::warning(
            "Timeouts",
            CONFIGURATION,
            format!("{} above {MAX_TIMEOUT_SECS} seconds, capped", capped.join(", ")),
        )
        .with_fix(format!("Use at most {MAX_TIMEOUT_SECS} seconds per timeout"))
    } else {
        Check::ok("Timeouts", CONFIGURATION, "Timeout settings are valid")
    };
    checks.push(check);
}

/// Check that the API accepts the token by fetching the account
pub async fn check_api_reachable(checks: &mut Vec<Check>, config: &ClientConfig) {
    let name = "API connection";

    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            checks.push(Check::error(name, CONNECTIVITY, e.to_string()));
            return;
        }
    };

    let check = match client.get(ACCOUNT_INFORMATION_PATH, &[]).await {
        Ok(account) => {
            let who = account
                .get("email")
                .or_else(|| account.get("name"))
                .and_then(|v| v.as_str())
                .unwrap_or("unknown account");
            Check::ok(name, CONNECTIVITY, format!("Authenticated as {who}"))
        }
        Err(ApiError::Unauthorized) => {
            Check::error(name, CONNECTIVITY, "The API rejected the token")
                .with_fix("Check REMEMBERIZER_API_TOKEN; the token may have been revoked")
        }
        Err(e @ ApiError::ConnectionFailure { .. }) => {
            Check::error(name, CONNECTIVITY, e.to_string())
                .with_fix(format!("Check network access to {}", client.base_url()))
        }
        Err(e) => Check::warning(name, CONNECTIVITY, e.to_string()),
    };
    checks.push(check);
}
