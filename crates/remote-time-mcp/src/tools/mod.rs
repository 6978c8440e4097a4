//! Tools
//!
//! Named functions with a JSON input schema, callable over HTTP.

mod clock;
mod time_now;

pub use clock::{Clock, FixedClock, SystemClock};
pub use time_now::TimeNow;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// JSON-RPC code for an unknown method or tool
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC code for bad arguments
pub const INVALID_PARAMS: i32 = -32602;

/// Error type for tool calls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// JSON-RPC error code for this error
    pub fn code(&self) -> i32 {
        match self {
            ToolError::UnknownTool(_) => METHOD_NOT_FOUND,
            ToolError::InvalidArguments(_) => INVALID_PARAMS,
        }
    }
}

/// Tool definition returned by tools/list
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Content block in a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

/// Result of a successful tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
}

impl ToolResult {
    /// Single text block result
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text",
                text: text.into(),
            }],
        }
    }
}

/// A callable tool
pub trait Tool: Send + Sync {
    /// Name, description and input schema
    fn definition(&self) -> ToolDefinition;

    /// Run the tool with JSON arguments
    fn call(&self, arguments: &Value) -> Result<ToolResult, ToolError>;
}

/// Immutable set of tools, shared read-only between handlers
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool, reading time from `clock`
    pub fn with_builtin_tools(clock: Arc<dyn Clock>) -> Self {
        let mut registry = Self::new();
        registry.register(TimeNow::new(clock));
        registry
    }

    /// Add a tool. Lookups return the first tool registered under a name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.push(Box::new(tool));
    }

    /// Definitions of every registered tool, in registration order
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Call a tool by name
    pub fn call(&self, name: &str, arguments: &Value) -> Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.definition().name == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tracing::debug!(tool = %name, "Calling tool");
        tool.call(arguments)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
