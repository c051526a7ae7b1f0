//! Paths of the remote API, relative to the configured base URL

/// Account information
pub const ACCOUNT_INFORMATION_PATH: &str = "account/";
/// Paginated document listing
pub const LIST_DOCUMENTS_PATH: &str = "documents/";
/// Semantic search over document chunks
pub const SEARCH_PATH: &str = "documents/search/";
/// LLM-assisted search over document chunks
pub const AGENTIC_SEARCH_PATH: &str = "documents/agentic_search/";
/// Connected integrations
pub const LIST_INTEGRATIONS_PATH: &str = "integrations/";
/// Ingest new content
pub const MEMORIZE_PATH: &str = "documents/memorize/";

/// Contents of one document
pub fn document_contents(id: &str) -> String {
    format!("documents/{id}/contents/")
}

/// Contents of one Slack discussion
pub fn slack_discussion_contents(id: &str) -> String {
    format!("discussions/{id}/contents/?integration_type=slack")
}
