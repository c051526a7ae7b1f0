//! Name-indexed set of the tools the server exposes
//!
//! Each tool implements [`McpTool`] and is registered by name. The server and
//! the CLI look tools up here instead of matching on names.

use crate::client::ApiClient;
use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::Error as McpError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// What a tool needs to reach the Rememberizer API
#[derive(Clone)]
pub struct ToolContext {
    /// Client for the remote API, shared by every concurrent tool call
    pub client: Arc<ApiClient>,
}

impl ToolContext {
    /// Wrap a shared API client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

/// A single MCP tool backed by one Rememberizer endpoint
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Wire name, as listed to clients
    fn name(&self) -> &'static str;

    /// Human-readable description shown to the model
    fn description(&self) -> &'static str;

    /// JSON schema of the accepted arguments
    fn schema(&self) -> serde_json::Value;

    /// Validate `arguments`, call the API and render the reply
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Tools keyed by wire name, iterated in name order
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Add `tool`, replacing any tool already registered under its name
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Tool descriptors for a `tools/list` reply
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };
                Tool::new(tool.name(), tool.description(), Arc::new(schema_map))
            })
            .collect()
    }

    /// Number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tool is registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Helpers shared by the tool implementations
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Deserialize the raw argument map, mapping failures to `invalid_params`
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Content::text(content.into())])
    }
}
