//! Wire Messages
//!
//! JSON-RPC shaped bodies exchanged over HTTP and WebSocket.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::ToolDefinition;

pub const JSONRPC_VERSION: &str = "2.0";

/// Result sent to every `/mcp` WebSocket client
pub const GREETING_RESULT: &str = "Hello MCP";

/// Id sent with the greeting. Not correlated with anything the client sends.
pub const GREETING_ID: u64 = 1;

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse<R = Value> {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Value,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl<R> JsonRpcResponse<R> {
    /// Create a success response
    pub fn success(id: Value, result: R) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }
}

impl JsonRpcResponse<&'static str> {
    /// The canned `/mcp` greeting
    pub fn greeting() -> Self {
        Self::success(Value::from(GREETING_ID), GREETING_RESULT)
    }
}

/// Body of `POST /mcp/tools/call`
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallRequest {
    /// Echoed back in the response; `null` when absent
    #[serde(default)]
    pub id: Value,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Body of `GET /mcp/tools/list`
#[derive(Debug, Clone, Serialize)]
pub struct ToolsListResponse {
    pub tools: Vec<ToolDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolError;
    use serde_json::json;

    #[test]
    fn test_greeting_is_exact() {
        let json = serde_json::to_string(&JsonRpcResponse::<&str>::greeting()).unwrap();
        assert_eq!(json, r#"{"jsonrpc":"2.0","result":"Hello MCP","id":1}"#);
    }

    #[test]
    fn test_error_response() {
        let err = ToolError::UnknownTool("x".into());
        let resp: JsonRpcResponse = JsonRpcResponse::error(json!("abc"), err.code(), err.to_string());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"]["code"], -32601);
        assert_eq!(json["id"], "abc");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_tool_call_request_defaults() {
        let req: ToolCallRequest = serde_json::from_str(r#"{"name":"time_now"}"#).unwrap();
        assert_eq!(req.id, Value::Null);
        assert_eq!(req.arguments, Value::Null);
    }

    #[test]
    fn test_tool_call_request_full() {
        let req: ToolCallRequest = serde_json::from_value(json!({
            "id": "any-id",
            "name": "time_now",
            "arguments": {"fmt": "%Y"}
        }))
        .unwrap();
        assert_eq!(req.id, "any-id");
        assert_eq!(req.arguments["fmt"], "%Y");
    }
}
