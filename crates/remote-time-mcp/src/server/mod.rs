//! HTTP + WebSocket Server
//!
//! One listener serves the probes, the tool surface and the `/mcp` WebSocket.

mod handler;
mod listener;
mod protocol;
mod router;
mod state;

pub use handler::*;
pub use listener::*;
pub use protocol::*;
pub use router::*;
pub use state::*;
