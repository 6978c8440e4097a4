//! remote-time-mcp
//!
//! A small HTTP + WebSocket service. This crate provides:
//! - Liveness probes on `/` and `/health`
//! - A stub MCP WebSocket endpoint on `/mcp`
//! - A `time_now` tool exposed over HTTP
//! - Layered configuration and structured logging

// Typed errors
pub mod error;

// Layered configuration (defaults, env, CLI)
pub mod config;

// Callable tools
pub mod tools;

// HTTP + WebSocket server
pub mod server;

pub use error::{Error, Result};
