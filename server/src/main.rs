//! Buddy Portal host: server-renders the Leptos app and serves its bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal talks to the buddy matching backend straight from the browser,
//! so this process only renders the HTML shell, serves `/pkg` and answers
//! health checks. Configuration errors abort startup with a typed error.

mod config;
mod routes;

use config::{ConfigError, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let leptos_options = config::leptos_options()?;
    let app = routes::app(leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, api_url = %config.api_url, "buddy portal listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
