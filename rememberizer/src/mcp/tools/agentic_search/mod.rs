//! Agentic search tool for MCP operations
//!
//! The remote service runs an LLM over the query and the optional user context
//! before searching, which gives better recall for vague questions than
//! plain semantic search.

use crate::endpoints::AGENTIC_SEARCH_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::{AgenticSearchRequest, MAX_N_RESULTS};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{json, Value};

/// Tool for LLM-assisted search over internal knowledge
#[derive(Default)]
pub struct AgenticSearchTool;

impl AgenticSearchTool {
    /// Creates a new instance of the AgenticSearchTool
    pub fn new() -> Self {
        Self
    }

    fn request_body(request: &AgenticSearchRequest) -> Value {
        let mut body = json!({
            "query": request.query,
            "n_chunks": request.n_results,
        });
        if let Some(user_context) = &request.user_context {
            body["user_context"] = json!(user_context);
        }
        if let Some(from) = &request.from_datetime {
            body["from"] = json!(from);
        }
        if let Some(to) = &request.to_datetime {
            body["to"] = json!(to);
        }
        body
    }
}

#[async_trait]
impl McpTool for AgenticSearchTool {
    fn name(&self) -> &'static str {
        RememberizerTool::AgenticSearch.as_str()
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Up to a 400-word sentence for which you wish to find semantically similar chunks of knowledge"
                },
                "user_context": {
                    "type": "string",
                    "description": "The additional context for the query. You might need to summarize the conversation up to this point for better context-aware results"
                },
                "n_results": {
                    "type": "integer",
                    "description": "Number of semantically similar chunks of text to return (default 5)",
                    "minimum": 1,
                    "maximum": MAX_N_RESULTS
                },
                "from_datetime_ISO8601": {
                    "type": "string",
                    "description": "Start date in ISO 8601 format with timezone (e.g., 2023-01-01T00:00:00Z)"
                },
                "to_datetime_ISO8601": {
                    "type": "string",
                    "description": "End date in ISO 8601 format with timezone (e.g., 2024-01-01T00:00:00Z)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AgenticSearchRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpErrorHandler::handle_result(
            McpValidation::validate_not_empty(&request.query, "query").and_then(|_| {
                McpValidation::validate_range(request.n_results, "n_results", 1, MAX_N_RESULTS)
            }),
            "validate agentic search request",
        )?;

        tracing::debug!("Agentic search for '{}'", request.query);

        let data = context
            .client
            .post(AGENTIC_SEARCH_PATH, &Self::request_body(&request), &[])
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "agentic search"))?;

        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_titled("Matched chunks", &data),
        ))
    }
}
