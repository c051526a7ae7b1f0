//! Semantic search tool for MCP operations
//!
//! This module provides the SearchTool, which finds knowledge chunks similar to
//! a piece of text across every connected source.

use crate::endpoints::SEARCH_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::{SearchRequest, MAX_N_RESULTS};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for semantic search over internal knowledge
#[derive(Default)]
pub struct SearchTool;

impl SearchTool {
    /// Creates a new instance of the SearchTool
    pub fn new() -> Self {
        Self
    }

    fn query_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", request.match_this.clone()),
            ("n", request.n_results.to_string()),
        ];
        if let Some(from) = &request.from_datetime {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &request.to_datetime {
            params.push(("to", to.clone()));
        }
        params
    }
}

#[async_trait]
impl McpTool for SearchTool {
    fn name(&self) -> &'static str {
        RememberizerTool::Search.as_str()
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "match_this": {
                    "type": "string",
                    "description": "Up to a 400-word sentence for which you wish to find semantically similar chunks of knowledge"
                },
                "n_results": {
                    "type": "integer",
                    "description": "Number of semantically similar chunks of text to return (default 5)",
                    "minimum": 1,
                    "maximum": MAX_N_RESULTS
                },
                "from_datetime_ISO8601": {
                    "type": "string",
                    "description": "Start date in ISO 8601 format with timezone (e.g., 2023-01-01T00:00:00Z). Use this to filter results from a specific date."
                },
                "to_datetime_ISO8601": {
                    "type": "string",
                    "description": "End date in ISO 8601 format with timezone (e.g., 2024-01-01T00:00:00Z). Use this to filter results until a specific date."
                }
            },
            "required": ["match_this"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchRequest = BaseToolImpl::parse_arguments(arguments)?;

        McpErrorHandler::handle_result(
            McpValidation::validate_not_empty(&request.match_this, "match_this").and_then(
                |_| McpValidation::validate_range(request.n_results, "n_results", 1, MAX_N_RESULTS),
            ),
            "validate search request",
        )?;

        tracing::debug!(
            "Searching for '{}', n_results: {}",
            request.match_this,
            request.n_results
        );

        let data = context
            .client
            .get(SEARCH_PATH, &Self::query_params(&request))
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "search"))?;

        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_titled("Matched chunks", &data),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tools::test_support::{create_test_context, result_text};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_search_tool_new() {
        let tool = SearchTool::new();
        assert_eq!(
            tool.name(),
            "retrieve_semantically_similar_internal_knowledge"
        );
        assert!(!tool.description().is_empty());
    }

    #[test]
    fn test_search_tool_schema() {
        let tool = SearchTool::new();
        let schema = tool.schema();

        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["match_this"].is_object());
        assert!(schema["properties"]["n_results"].is_object());
        assert_eq!(schema["required"], json!(["match_this"]));
    }

    #[test]
    fn test_query_params_skip_missing_dates() {
        let request = SearchRequest {
            match_this: "q".to_string(),
            n_results: 3,
            from_datetime: None,
            to_datetime: Some("2024-01-01T00:00:00Z".to_string()),
        };
        let params = SearchTool::query_params(&request);
        assert_eq!(
            params,
            vec![
                ("q", "q".to_string()),
                ("n", "3".to_string()),
                ("to", "2024-01-01T00:00:00Z".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_tool_execute() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/documents/search/"))
            .and(query_param("q", "release process"))
            .and(query_param("n", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"matched_content": "Tag, then publish", "document": {"pk": 1}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let context = create_test_context(&server);
        let mut arguments = serde_json::Map::new();
        arguments.insert("match_this".to_string(), json!("release process"));

        let result = SearchTool::new().execute(arguments, &context).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = result_text(&result);
        assert!(text.starts_with("Matched chunks:"));
        assert!(text.contains("Tag, then publish"));
    }

    #[tokio::test]
    async fn test_search_tool_execute_empty_query() {
        let server = MockServer::start().await;
        let context = create_test_context(&server);

        let mut arguments = serde_json::Map::new();
        arguments.insert("match_this".to_string(), json!("  "));

        let err = SearchTool::new()
            .execute(arguments, &context)
            .await
            .unwrap_err();
        assert!(err.message.contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_search_tool_execute_out_of_range_n_results() {
        let server = MockServer::start().await;
        let context = create_test_context(&server);

        let mut arguments = serde_json::Map::new();
        arguments.insert("match_this".to_string(), json!("q"));
        arguments.insert("n_results".to_string(), json!(0));

        let err = SearchTool::new()
            .execute(arguments, &context)
            .await
            .unwrap_err();
        assert!(err.message.contains("n_results"));
    }
}
