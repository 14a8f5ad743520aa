//! NDIS API — HTTP entry point.
//!
//! Binds the TCP listener and serves the bootstrapped router. Routing, CORS
//! policy, and error semantics all live in the library modules.

mod app;
mod config;
mod cors;
mod error;
mod routes;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env();
    tracing::info!(title = %config.title, version = %config.version, "ndis-api starting");

    let router = routes::build_router(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
