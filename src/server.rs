//! Server startup: logging, wiring and the listen loop.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::content::StaticContentSource;
use crate::adapters::http::{app_router, ContactAppState, PortfolioAppState};
use crate::adapters::mail::transport_from_config;
use crate::config::{AppConfig, ConfigError, ServerConfig};
use crate::ports::{ContentError, MailError};

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load content: {0}")]
    Content(#[from] ContentError),

    #[error("failed to set up mail transport: {0}")]
    Mail(#[from] MailError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter. Production logs are JSON.
pub fn init_tracing(config: &ServerConfig) -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let result = if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .try_init()
    };

    result.map_err(|e| StartupError::Logging(e.to_string()))
}

/// Builds the application router from configuration.
pub fn build_app(config: &AppConfig) -> Result<Router, StartupError> {
    let content_source = StaticContentSource::from_config(&config.content)?;
    let mail_transport = transport_from_config(&config.email)?;

    let portfolio = PortfolioAppState::new(Arc::new(content_source));
    let contact = ContactAppState::new(mail_transport, config.email.account.clone());

    Ok(app_router(&config.server, portfolio, contact))
}

/// Loads, validates and serves until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate().map_err(ConfigError::from)?;

    let app = build_app(&config)?;
    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = TcpListener::bind(addr).await?;

    info!(
        addr = %addr,
        environment = ?config.server.environment,
        mail_configured = config.email.is_configured(),
        "Server running"
    );
    if config.is_production() {
        info!(static_dir = %config.server.static_dir.display(), "Serving client bundle");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
