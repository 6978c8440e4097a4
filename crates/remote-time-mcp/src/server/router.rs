//! HTTP Router
//!
//! Sets up the axum router with the probes, the tool surface and the WebSocket endpoint.

use axum::{
    Json, Router,
    extract::{State, WebSocketUpgrade},
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handler::handle_websocket;
use super::protocol::{JsonRpcResponse, ToolCallRequest, ToolsListResponse};
use super::state::AppState;
use crate::tools::{ToolError, ToolResult};

/// Name reported by the root probe
pub const SERVICE_NAME: &str = "remote-time-mcp";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness/readiness probes
        .route("/", get(root))
        .route("/health", get(health_check))
        // WebSocket endpoint - one greeting, then close
        .route("/mcp", get(ws_upgrade))
        // Tool surface
        .route("/mcp/tools/list", get(tools_list))
        .route("/mcp/tools/call", post(tools_call))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// WebSocket upgrade handler
async fn ws_upgrade(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_websocket)
}

/// Root probe response
#[derive(Serialize)]
struct RootResponse {
    ok: bool,
    service: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        service: SERVICE_NAME,
    })
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn tools_list(State(state): State<AppState>) -> Json<ToolsListResponse> {
    Json(ToolsListResponse {
        tools: state.tools().list(),
    })
}

async fn tools_call(
    State(state): State<AppState>,
    Json(request): Json<ToolCallRequest>,
) -> (StatusCode, Json<JsonRpcResponse<ToolResult>>) {
    match state.tools().call(&request.name, &request.arguments) {
        Ok(result) => (
            StatusCode::OK,
            Json(JsonRpcResponse::success(request.id, result)),
        ),
        Err(e) => {
            tracing::info!(tool = %request.name, "Tool call rejected: {}", e);
            let status = status_for(&e);
            (
                status,
                Json(JsonRpcResponse::error(request.id, e.code(), e.to_string())),
            )
        }
    }
}

fn status_for(err: &ToolError) -> StatusCode {
    match err {
        ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
        ToolError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
    }
}
