//! proxyauth
//!
//! Answers sub-request authentication checks from an upstream proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Proxy sub-request         ┌──────────────────────────────────────────────┐
//!     POST /api/2/domains/      │                  PROXYAUTH                   │
//!       {domain}/proxyauth      │                                              │
//!     ──────────────────────────┼─▶ http server ─▶ routing ─▶ security         │
//!                               │                   (path)    (verifier)       │
//!                               │                                 │            │
//!                               │                                 ▼            │
//!     200 {"access_granted"..}  │                              registry        │
//!     404 (empty)               │                              (frozen)        │
//!     ◀─────────────────────────┼── response encoder ◀────────────┘            │
//!                               │                                              │
//!                               │  config · lifecycle · observability          │
//!                               └──────────────────────────────────────────────┘
//! ```
//!
//! Usage: `proxyauth [PORT] [--users users.json] [--config proxyauth.toml]`

use clap::Parser;

use proxyauth::http::HttpServer;
use proxyauth::lifecycle::{signals, startup, Cli, Shutdown, StartupError};
use proxyauth::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging is not up yet; surface the readable message.
    let config = startup::resolve_config(&cli)
        .map_err(|e| StartupError::from(e).to_string())?;
    logging::init_logging(&config.observability).map_err(StartupError::from)?;

    tracing::info!("proxyauth v{} starting", env!("CARGO_PKG_VERSION"));

    // Registry first: never bind with a partial registry.
    let registry = match startup::load(&config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    if let Some(addr) = startup::metrics_addr(&config.observability)? {
        metrics::init_metrics(addr).map_err(StartupError::from)?;
    }

    let listener = startup::bind_listener(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, registry);
    tracing::info!(
        port = server.config().listener.port,
        realm_file = ?server.config().registry.path,
        request_timeout_secs = server.config().timeouts.request_secs,
        "Configuration loaded"
    );
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
