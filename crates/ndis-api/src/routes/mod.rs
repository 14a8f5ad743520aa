//! Route definitions and router builder.

pub mod health;

use axum::Router;
use axum::http::Method;

use crate::app::App;
use crate::config::ServiceConfig;
use crate::cors::CorsPolicy;
use crate::error::BootstrapError;

/// Build the Axum router for the whole service from its configuration.
pub fn build_router(config: &ServiceConfig) -> Result<Router, BootstrapError> {
    let policy = CorsPolicy::from_config(&config.cors)?;

    App::new(&config.title, &config.version)
        .with_cors(policy)?
        .route(Method::GET, "/health", health::health)
        .map(App::into_router)
}
