//! remote-time-mcp server
//!
//! Liveness probes, a stub MCP WebSocket and the `time_now` tool on one port.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use remote_time_mcp::config::{ConfigOverrides, ServerConfig};
use remote_time_mcp::server::{self, AppState};
use remote_time_mcp::tools::{SystemClock, ToolRegistry};

/// remote-time-mcp server
#[derive(Parser, Debug)]
#[command(name = "remote-time-mcp", version)]
#[command(about = "Remote time MCP server", long_about = None)]
struct Args {
    /// Server port (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Command-line layer of the configuration
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides { port: self.port }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // One thread multiplexes every connection
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    init_tracing(args.log_json);

    info!("Starting remote-time-mcp v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::load(&args.overrides())?;

    let tools = ToolRegistry::with_builtin_tools(Arc::new(SystemClock));
    info!("Registered {} tools", tools.len());
    let state = AppState::new(tools);

    let listener = server::bind(&config).await?;
    server::serve(listener, state, server::shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("remote_time_mcp=info,tower_http=info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
