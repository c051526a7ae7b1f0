//! Memorize tool for MCP operations

use crate::endpoints::MEMORIZE_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::MemorizeRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool for storing new content in the user's knowledge
#[derive(Default)]
pub struct MemorizeTool;

impl MemorizeTool {
    /// Creates a new instance of the MemorizeTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for MemorizeTool {
    fn name(&self) -> &'static str {
        RememberizerTool::Memorize.as_str()
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the information, used to identify it later"
                },
                "content": {
                    "type": "string",
                    "description": "The information to memorize"
                }
            },
            "required": ["name", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: MemorizeRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpErrorHandler::handle_result(
            McpValidation::validate_not_empty(&request.name, "name")
                .and_then(|_| McpValidation::validate_not_empty(&request.content, "content")),
            "validate memorize request",
        )?;

        let body = json!({
            "name": request.name,
            "content": request.content,
        });
        context
            .client
            .post(MEMORIZE_PATH, &body, &[])
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "memorize"))?;

        tracing::info!("Memorized '{}'", request.name);
        Ok(BaseToolImpl::create_success_response(format!(
            "Successfully stored '{}' in Rememberizer",
            request.name
        )))
    }
}
