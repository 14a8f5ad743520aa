//! Typed cross-origin policy, validated at startup.
//!
//! [`CorsPolicy`] is the checked form of the raw [`CorsConfig`] lists. Once
//! construction succeeds, conversion into the tower-http middleware is
//! infallible, so a misconfigured policy can never reach the serving path.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::error::BootstrapError;

/// Wildcard sentinel accepted in raw CORS lists.
pub const WILDCARD: &str = "*";

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// One policy dimension: everything, or an explicit set.
#[derive(Debug, Clone)]
enum Allowed<T> {
    Any,
    List(Vec<T>),
}

impl<T> Allowed<T> {
    fn parse(raw: &[String], parse_one: impl Fn(&str) -> Result<T, BootstrapError>) -> Result<Self, BootstrapError> {
        if raw.iter().any(|v| v == WILDCARD) {
            return Ok(Allowed::Any);
        }
        let parsed = raw.iter().map(|v| parse_one(v)).collect::<Result<Vec<_>, _>>()?;
        Ok(Allowed::List(parsed))
    }
}

/// Validated cross-origin policy. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: Allowed<HeaderValue>,
    credentials: bool,
    methods: Allowed<Method>,
    headers: Allowed<HeaderName>,
}

impl CorsPolicy {
    /// Validate a raw [`CorsConfig`] into a policy.
    ///
    /// A wildcard origin combined with credentials is rejected: credentialed
    /// responses must echo a specific origin, never `*`.
    pub fn from_config(config: &CorsConfig) -> Result<Self, BootstrapError> {
        let origins = Allowed::parse(&config.allow_origins, |o| {
            HeaderValue::from_str(o).map_err(|_| BootstrapError::InvalidOrigin(o.to_string()))
        })?;
        if config.allow_credentials && matches!(origins, Allowed::Any) {
            return Err(BootstrapError::CredentialedWildcardOrigin);
        }

        let methods = Allowed::parse(&config.allow_methods, |m| {
            m.to_ascii_uppercase()
                .parse::<Method>()
                .map_err(|_| BootstrapError::InvalidMethod(m.to_string()))
        })?;

        let headers = Allowed::parse(&config.allow_headers, |h| {
            h.parse::<HeaderName>()
                .map_err(|_| BootstrapError::InvalidHeaderName(h.to_string()))
        })?;

        Ok(Self {
            origins,
            credentials: config.allow_credentials,
            methods,
            headers,
        })
    }

    /// Convert into the tower-http middleware layer.
    ///
    /// The literal `*` cannot be combined with
    /// `Access-Control-Allow-Credentials`, so under credentials a wildcard
    /// method list expands to the full standard set and wildcard headers
    /// mirror the preflight request.
    pub fn into_layer(self) -> CorsLayer {
        let allow_origin = match self.origins {
            Allowed::Any => AllowOrigin::any(),
            Allowed::List(origins) => AllowOrigin::list(origins),
        };

        let allow_methods = match self.methods {
            Allowed::Any if self.credentials => AllowMethods::list(all_methods()),
            Allowed::Any => AllowMethods::any(),
            Allowed::List(methods) => AllowMethods::list(methods),
        };

        let allow_headers = match self.headers {
            Allowed::Any if self.credentials => AllowHeaders::mirror_request(),
            Allowed::Any => AllowHeaders::any(),
            Allowed::List(headers) => AllowHeaders::list(headers),
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(allow_methods)
            .allow_headers(allow_headers)
            .allow_credentials(self.credentials)
            .max_age(PREFLIGHT_MAX_AGE)
    }
}

/// Every method a wildcard stands for when it cannot be sent literally.
fn all_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
    ]
}
