//! MCP server exposing Rememberizer knowledge as tools and resources

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::resources::DocumentResources;
use super::shared_utils::McpErrorHandler;
use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::register_rememberizer_tools;

const SERVER_NAME: &str = "Rememberizer";

const INSTRUCTIONS: &str = "Gives access to the user's personal and team knowledge stored in Rememberizer. \
Use the search tools to find relevant chunks, list_personal_team_knowledge_documents to browse documents, \
and remember_this to store new information. Documents can also be read as rememberizer:// resources.";

/// MCP server backed by a single [`ApiClient`]
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    resources: DocumentResources,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server that talks to the service through `client`
    pub fn new(client: ApiClient) -> Self {
        let client = Arc::new(client);

        let mut tool_registry = ToolRegistry::new();
        register_rememberizer_tools(&mut tool_registry);
        tracing::debug!("Registered {} MCP tools", tool_registry.len());

        Self {
            tool_registry: Arc::new(tool_registry),
            resources: DocumentResources::new(client.clone()),
            tool_context: Arc::new(ToolContext::new(client)),
        }
    }

    /// Create a server from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    /// The registry of tools this server exposes
    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Execute a tool by name outside of an MCP session
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => tool.execute(arguments, &self.tool_context).await,
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }

    /// List document resources outside of an MCP session
    pub async fn list_document_resources(&self) -> std::result::Result<Vec<Resource>, McpError> {
        McpErrorHandler::handle_result(self.resources.list().await, "list resources")
    }

    /// Read a resource outside of an MCP session
    pub async fn read_document_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ResourceContents, McpError> {
        McpErrorHandler::handle_result(self.resources.read(uri).await, "read resource")
    }

    fn capabilities() -> ServerCapabilities {
        ServerCapabilities {
            prompts: None,
            tools: Some(ToolsCapability {
                list_changed: Some(false),
            }),
            resources: Some(ResourcesCapability {
                subscribe: Some(false),
                list_changed: Some(false),
            }),
            logging: None,
            completions: None,
            experimental: None,
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.list_document_resources().await?,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        Ok(ReadResourceResult {
            contents: vec![self.read_document_resource(&request.uri).await?],
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: Self::capabilities(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
