//! WebSocket Connection Handler
//!
//! Each `/mcp` connection gets one greeting frame and is then closed by the server.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use uuid::Uuid;

use super::protocol::JsonRpcResponse;

/// How long to wait for the client's close frame after ours
const CLOSE_GRACE: Duration = Duration::from_secs(2);

/// Handle a WebSocket connection
pub async fn handle_websocket(mut socket: WebSocket) {
    let connection_id = Uuid::new_v4();
    tracing::info!(%connection_id, "WS /mcp connected");

    let greeting = match serde_json::to_string(&JsonRpcResponse::<&str>::greeting()) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(%connection_id, "Failed to encode greeting: {}", e);
            return;
        }
    };

    if let Err(e) = socket.send(Message::Text(greeting.into())).await {
        tracing::debug!(%connection_id, "Failed to send greeting: {}", e);
        return;
    }

    if let Err(e) = socket.send(Message::Close(None)).await {
        tracing::debug!(%connection_id, "Failed to send close frame: {}", e);
        return;
    }

    // Client frames are discarded unread until its close frame arrives
    let handshake = tokio::time::timeout(CLOSE_GRACE, async {
        while let Some(Ok(msg)) = socket.recv().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    })
    .await;

    if handshake.is_err() {
        tracing::debug!(%connection_id, "Client did not acknowledge close");
    }

    tracing::debug!(%connection_id, "WS /mcp closed");
}
