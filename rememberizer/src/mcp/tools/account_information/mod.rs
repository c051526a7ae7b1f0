//! Account information tool for MCP operations

use crate::endpoints::ACCOUNT_INFORMATION_PATH;
use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RememberizerTool;
use crate::mcp::types::AccountInformationRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for reading the account that owns the API token
#[derive(Default)]
pub struct AccountInformationTool;

impl AccountInformationTool {
    /// Creates a new instance of the AccountInformationTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AccountInformationTool {
    fn name(&self) -> &'static str {
        RememberizerTool::AccountInformation.as_str()
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
        let _request: AccountInformationRequest = BaseToolImpl::parse_arguments(arguments)?;

        let data = context
            .client
            .get(ACCOUNT_INFORMATION_PATH, &[])
            .await
            .map_err(|e| McpErrorHandler::handle_error(e.into(), "account information"))?;

        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_titled("Account information", &data),
        ))
    }
}
