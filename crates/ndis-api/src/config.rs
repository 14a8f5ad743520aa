//! API server configuration.

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Human-readable service title (informational, logged at startup).
    #[serde(default = "default_title")]
    pub title: String,
    /// Service version string (informational).
    #[serde(default = "default_version")]
    pub version: String,
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Cross-origin policy applied to every inbound request.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Raw CORS configuration as it appears in config sources.
///
/// A literal `"*"` entry in any list is the wildcard sentinel meaning "all
/// origins/methods/headers". Validation and typing happen in
/// [`crate::cors::CorsPolicy`].
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to read responses (e.g., ["http://localhost:3000"]).
    #[serde(default = "default_origins")]
    pub allow_origins: Vec<String>,
    /// Whether credentialed (cookie-bearing) requests are allowed.
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    /// Methods permitted cross-origin.
    #[serde(default = "default_wildcard")]
    pub allow_methods: Vec<String>,
    /// Request headers permitted cross-origin.
    #[serde(default = "default_wildcard")]
    pub allow_headers: Vec<String>,
}

fn default_title() -> String {
    "NDIS API".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

impl ServiceConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("NDIS_API_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("NDIS_API_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }
        if let Ok(origins) = std::env::var("NDIS_API_CORS_ORIGINS") {
            config.cors.allow_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        config
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            version: default_version(),
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: default_origins(),
            allow_credentials: default_true(),
            allow_methods: default_wildcard(),
            allow_headers: default_wildcard(),
        }
    }
}
