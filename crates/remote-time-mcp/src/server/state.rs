//! Server Application State
//!
//! Read-only data shared by all handlers.

use std::sync::Arc;

use crate::tools::ToolRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Callable tools, fixed at startup
    tools: ToolRegistry,
}

impl AppState {
    /// Create new application state
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { tools }),
        }
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        &self.inner.tools
    }
}
