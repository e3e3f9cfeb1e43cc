//! Startup orchestration.
//!
//! # Responsibilities
//! - Merge defaults, the optional TOML file and command-line flags
//! - Load the realm file into a frozen registry
//! - Bind the listener last, once everything else succeeded
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Command-line flags override the config file

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::loader::{read_config, ConfigError};
use crate::config::validation::validate_config;
use crate::config::{ListenerConfig, ObservabilityConfig, ServiceConfig};
use crate::registry::loader::{load_registry, RegistryError};
use crate::registry::Registry;

/// Command-line arguments of the server binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "proxyauth")]
#[command(about = "Credential verification endpoint for proxy sub-request authentication", long_about = None)]
pub struct Cli {
    /// Port to listen on [default: 80]
    pub port: Option<u16>,

    /// JSON realm file [default: users.json]
    #[arg(short, long, value_name = "PATH")]
    pub users: Option<PathBuf>,

    /// Optional TOML service configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host or IP to bind [default: 0.0.0.0]
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid metrics address {address:?}: {source}")]
    MetricsAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("metrics: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Build the effective configuration: defaults < file < flags.
pub fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(port) = cli.port {
        config.listener.port = port;
    }
    if let Some(users) = &cli.users {
        config.registry.path = users.clone();
    }
    if let Some(bind) = &cli.bind {
        config.listener.host = bind.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load the registry named by the configuration.
pub fn load(config: &ServiceConfig) -> Result<Arc<Registry>, StartupError> {
    let registry = load_registry(&config.registry.path)?;
    Ok(Arc::new(registry))
}

/// Scrape address for the metrics exporter, `None` when metrics are off.
pub fn metrics_addr(config: &ObservabilityConfig) -> Result<Option<SocketAddr>, StartupError> {
    if !config.metrics_enabled {
        return Ok(None);
    }
    config
        .metrics_address
        .parse()
        .map(Some)
        .map_err(|source| StartupError::MetricsAddress {
            address: config.metrics_address.clone(),
            source,
        })
}

/// Bind the TCP listener.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = format!("{}:{}", config.host, config.port);
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| StartupError::Bind { address, source })
}
