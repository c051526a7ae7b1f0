//! Document listing tool for MCP operations

use crate::endpoints::LIST_DOCUMENTS_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::{ListDocumentsRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for paging through the user's documents
#[derive(Default)]
pub struct ListDocumentsTool;

impl ListDocumentsTool {
    /// Creates a new instance of the ListDocumentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListDocumentsTool {
    fn name(&self) -> &'static str {
        RememberizerTool::ListDocuments.as_str()
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "page": {
                    "type": "integer",
                    "description": "Page number for pagination, starts at 1",
                    "minimum": 1,
                    "default": DEFAULT_PAGE
                },
                "page_size": {
                    "type": "integer",
                    "description": "Number of documents per page",
                    "minimum": 1,
                    "maximum": MAX_PAGE_SIZE,
                    "default": DEFAULT_PAGE_SIZE
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListDocumentsRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpErrorHandler::handle_result(
            McpValidation::validate_range(request.page, "page", 1, u32::MAX).and_then(|_| {
                McpValidation::validate_range(request.page_size, "page_size", 1, MAX_PAGE_SIZE)
            }),
            "validate list documents request",
        )?;

        let query = [
            ("page", request.page.to_string()),
            ("page_size", request.page_size.to_string()),
        ];
        let data = context
            .client
            .get(LIST_DOCUMENTS_PATH, &query)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "list documents"))?;

        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_titled("Documents", &data),
        ))
    }
}
