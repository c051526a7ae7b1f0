//! Calling MCP tools directly from the command line
//!
//! The CLI goes through the same [`McpServer`] dispatch an MCP client does, so
//! what is printed here is exactly what an assistant would receive.

use rememberizer::{ClientConfig, McpServer};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};
use crate::exit_codes::{EXIT_ERROR, EXIT_WARNING};

/// CLI-side handle for executing tools
pub struct CliToolContext {
    server: McpServer,
}

impl CliToolContext {
    /// Build a context from `REMEMBERIZER_*` environment variables
    pub fn from_env() -> CliResult<Self> {
        let config = ClientConfig::from_env().map_err(CliError::configuration)?;
        Self::from_config(&config)
    }

    /// Build a context from an explicit configuration
    pub fn from_config(config: &ClientConfig) -> CliResult<Self> {
        Ok(Self {
            server: McpServer::from_config(config)?,
        })
    }

    /// Execute a tool and return its text output
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> CliResult<String> {
        let result = self
            .server
            .call_tool_by_name(tool_name, arguments)
            .await
            .map_err(|e| CliError::new(e.message.to_string(), mcp_error_exit_code(&e)))?;

        let text = response_text(&result);
        if result.is_error == Some(true) {
            return Err(CliError::new(text, EXIT_WARNING));
        }
        Ok(text)
    }
}

/// Parse `--args` into an argument map
pub fn parse_arguments(raw: Option<&str>) -> CliResult<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(CliError::new("Tool arguments must be a JSON object", EXIT_ERROR)),
        Err(e) => Err(CliError::from_error(e, EXIT_ERROR)),
    }
}

/// Run the `call` command
pub async fn run_call_command(tool: String, args: Option<String>) -> CliResult<()> {
    let arguments = parse_arguments(args.as_deref())?;
    let context = CliToolContext::from_env()?;

    let text = context.execute_tool(&tool, arguments).await?;
    println!("{text}");
    Ok(())
}

fn response_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Bad arguments, unknown tools and rejected tokens are the caller's to fix.
fn mcp_error_exit_code(error: &rmcp::Error) -> i32 {
    use rmcp::model::ErrorCode;

    if error.code == ErrorCode::INVALID_PARAMS || error.code == ErrorCode::INVALID_REQUEST {
        EXIT_ERROR
    } else {
        EXIT_WARNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context_for(server: &MockServer) -> CliToolContext {
        let config = ClientConfig::new(server.uri(), "cli-token").unwrap();
        CliToolContext::from_config(&config).unwrap()
    }

    #[test]
    fn test_parse_arguments() {
        assert!(parse_arguments(None).unwrap().is_empty());

        let map = parse_arguments(Some(r#"{"page": 2}"#)).unwrap();
        assert_eq!(map.get("page"), Some(&json!(2)));

        assert_eq!(parse_arguments(Some("[1, 2]")).unwrap_err().exit_code, EXIT_ERROR);
        assert_eq!(parse_arguments(Some("{oops")).unwrap_err().exit_code, EXIT_ERROR);
    }

    #[tokio::test]
    async fn test_execute_tool_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/integrations/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [{"integration_type": "gmail"}]})),
            )
            .mount(&server)
            .await;

        let text = context_for(&server)
            .execute_tool("list_internal_knowledge_systems", Map::new())
            .await
            .unwrap();
        assert!(text.contains("gmail"));
    }

    #[tokio::test]
    async fn test_unknown_tool_exit_code() {
        let server = MockServer::start().await;
        let err = context_for(&server)
            .execute_tool("no_such_tool", Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert!(err.message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_server_failure_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = context_for(&server)
            .execute_tool("rememberizer_account_information", Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code, EXIT_WARNING);
        assert_eq!(err.message, "Failed to fetch account/. Status: 500");
    }
}
