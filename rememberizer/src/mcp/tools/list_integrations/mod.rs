//! Integration listing tool for MCP operations

use crate::endpoints::LIST_INTEGRATIONS_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::ListIntegrationsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::Value;

/// Tool for listing the knowledge sources connected to the account
#[derive(Default)]
pub struct ListIntegrationsTool;

impl ListIntegrationsTool {
    /// Creates a new instance of the ListIntegrationsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListIntegrationsTool {
    fn name(&self) -> &'static str {
        RememberizerTool::ListIntegrations.as_str()
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: ListIntegrationsRequest = BaseToolImpl::parse_arguments(arguments)?;

        let data = context
            .client
            .get(LIST_INTEGRATIONS_PATH, &[])
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "list integrations"))?;

        // The service wraps the list in a `data` envelope.
        let integrations = data.get("data").cloned().unwrap_or(data);
        if let Value::Array(items) = &integrations {
            tracing::info!("Retrieved {} integrations", items.len());
        }

        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_titled("Available integrations", &integrations),
        ))
    }
}
