//! Request types for the Rememberizer MCP tools

use serde::{Deserialize, Serialize};

/// Default number of chunks returned by the search tools
pub const DEFAULT_N_RESULTS: u32 = 5;
/// Upper bound accepted for `n_results`
pub const MAX_N_RESULTS: u32 = 100;
/// Default page of the document listing
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size of the document listing
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Upper bound accepted for `page_size`
pub const MAX_PAGE_SIZE: u32 = 1000;

fn default_n_results() -> u32 {
    DEFAULT_N_RESULTS
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Request for a semantic search
///
/// # Examples
///
/// ```ignore
/// SearchRequest {
///     match_this: "How do we rotate API keys?".to_string(),
///     n_results: 5,
///     from_datetime: None,
///     to_datetime: Some("2024-12-31T23:59:59Z".to_string()),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Sentence or paragraph to find similar knowledge for
    pub match_this: String,
    /// Number of chunks to return
    #[serde(default = "default_n_results")]
    pub n_results: u32,
    /// Only return knowledge created at or after this ISO 8601 timestamp
    #[serde(
        rename = "from_datetime_ISO8601",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub from_datetime: Option<String>,
    /// Only return knowledge created at or before this ISO 8601 timestamp
    #[serde(
        rename = "to_datetime_ISO8601",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_datetime: Option<String>,
}

/// Request for an LLM-assisted search
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AgenticSearchRequest {
    /// Question or topic to search for
    pub query: String,
    /// Extra context about the user's goal, used to refine the search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_context: Option<String>,
    /// Number of chunks to return
    #[serde(default = "default_n_results")]
    pub n_results: u32,
    /// Only return knowledge created at or after this ISO 8601 timestamp
    #[serde(
        rename = "from_datetime_ISO8601",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub from_datetime: Option<String>,
    /// Only return knowledge created at or before this ISO 8601 timestamp
    #[serde(
        rename = "to_datetime_ISO8601",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_datetime: Option<String>,
}

/// Request to list connected knowledge sources (no arguments)
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ListIntegrationsRequest {}

/// Request for account information (no arguments)
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AccountInformationRequest {}

/// Request to list documents, one page at a time
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ListDocumentsRequest {
    /// Page to return, starting at 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Documents per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListDocumentsRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Request to store new content
///
/// # Examples
///
/// ```ignore
/// MemorizeRequest {
///     name: "Release checklist".to_string(),
///     content: "1. Tag the release\n2. Publish notes".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct MemorizeRequest {
    /// Name of the new document
    pub name: String,
    /// Text to memorize
    pub content: String,
}
