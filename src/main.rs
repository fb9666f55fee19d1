//! OUI Registry Lookup Service
//!
//! An HTTP lookup service for the IEEE OUI vendor registry, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │             OUI REGISTRY SERVICE           │
//!                    │                                            │
//!   oui.txt ────────▶│  ┌──────────┐      ┌──────────────────┐   │
//!   (startup only)   │  │ registry │─────▶│  Arc<Registry>   │   │
//!                    │  │  loader  │      │   (immutable)    │   │
//!                    │  └──────────┘      └────────┬─────────┘   │
//!                    │                             │              │
//!   Client Request   │  ┌─────────┐      ┌────────▼─────────┐   │
//!   ────────────────▶│  │  http   │─────▶│    handlers      │   │
//!   Client Response  │  │ server  │◀─────│ list/get/resolve │   │
//!   ◀────────────────│  └─────────┘      └──────────────────┘   │
//!                    │                                            │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns        │ │
//!                    │  │  config   observability   lifecycle  │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;

use oui_registry::config::loader::load_config;
use oui_registry::lifecycle::{signals, Shutdown};
use oui_registry::observability::{logging, metrics};
use oui_registry::registry;
use oui_registry::{HttpServer, ServiceConfig};

#[derive(Parser)]
#[command(name = "oui-registry")]
#[command(about = "HTTP lookup service for the IEEE OUI vendor registry")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry source file (overrides registry.source_path)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Listener bind address (overrides listener.bind_address)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(source) = cli.source {
        config.registry.source_path = source.display().to_string();
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("oui-registry v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        source_path = %config.registry.source_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // The registry is loaded exactly once; an unreadable source file is
    // fatal, while malformed records inside it are skipped by the loader.
    let loaded = registry::load_from_file(Path::new(&config.registry.source_path))?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, loaded);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
