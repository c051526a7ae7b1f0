//! Rememberizer tools for MCP operations
//!
//! Each tool is in its own submodule with a dedicated implementation and a
//! `description.md` shown to the client. The set of tools is closed and named
//! by [`RememberizerTool`].

pub mod account_information;
pub mod agentic_search;
pub mod list_documents;
pub mod list_integrations;
pub mod memorize;
pub mod search;

use crate::mcp::tool_registry::ToolRegistry;
use std::fmt;
use std::str::FromStr;

/// The fixed set of tools exposed over MCP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RememberizerTool {
    /// Semantic search over internal knowledge
    Search,
    /// LLM-assisted search over internal knowledge
    AgenticSearch,
    /// Connected knowledge sources
    ListIntegrations,
    /// Account of the token owner
    AccountInformation,
    /// Paginated document listing
    ListDocuments,
    /// Store new content
    Memorize,
}

impl RememberizerTool {
    /// All tools, in registration order
    pub const ALL: [RememberizerTool; 6] = [
        RememberizerTool::Search,
        RememberizerTool::AgenticSearch,
        RememberizerTool::ListIntegrations,
        RememberizerTool::AccountInformation,
        RememberizerTool::ListDocuments,
        RememberizerTool::Memorize,
    ];

    /// Wire name of the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            RememberizerTool::Search => "retrieve_semantically_similar_internal_knowledge",
            RememberizerTool::AgenticSearch => "smart_search_internal_knowledge",
            RememberizerTool::ListIntegrations => "list_internal_knowledge_systems",
            RememberizerTool::AccountInformation => "rememberizer_account_information",
            RememberizerTool::ListDocuments => "list_personal_team_knowledge_documents",
            RememberizerTool::Memorize => "remember_this",
        }
    }
}

impl fmt::Display for RememberizerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RememberizerTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| format!("Unknown tool: {s}"))
    }
}

/// Register all Rememberizer tools with the registry
pub fn register_rememberizer_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchTool::new());
    registry.register(agentic_search::AgenticSearchTool::new());
    registry.register(list_integrations::ListIntegrationsTool::new());
    registry.register(account_information::AccountInformationTool::new());
    registry.register(list_documents::ListDocumentsTool::new());
    registry.register(memorize::MemorizeTool::new());
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::ApiClient;
    use crate::config::ClientConfig;
    use crate::mcp::tool_registry::ToolContext;
    use rmcp::model::{CallToolResult, RawContent};
    use std::sync::Arc;
    use wiremock::MockServer;

    /// Tool context whose client talks to the given mock server
    pub fn create_test_context(server: &MockServer) -> ToolContext {
        let config = ClientConfig::new(server.uri(), "test-token").unwrap();
        ToolContext::new(Arc::new(ApiClient::new(&config).unwrap()))
    }

    /// Concatenated text of a tool result
    pub fn result_text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
