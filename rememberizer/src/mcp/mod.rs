//! Model Context Protocol (MCP) server support
//!
//! This module serves Rememberizer search, listing and memorize operations as
//! MCP tools, and documents as `rememberizer://` resources.

// Module declarations
pub mod resources;
pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;
pub mod types;

// Re-export commonly used items from submodules
pub use resources::DocumentResources;
pub use server::McpServer;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};
pub use tools::{register_rememberizer_tools, RememberizerTool};
