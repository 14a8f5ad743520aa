//! Service bootstrap: the application value, its route table, and CORS
//! attachment.
//!
//! An [`App`] is built once at startup and folded into an immutable Axum
//! [`Router`] before the listener accepts traffic. Registration errors
//! (duplicate routes, double CORS attach) surface as [`BootstrapError`]
//! rather than panics so `main` can fail cleanly.

use std::collections::{HashMap, HashSet};

use axum::Router;
use axum::handler::Handler;
use axum::http::{Method, Uri};
use axum::routing::{MethodFilter, MethodRouter, on};
use tower_http::trace::TraceLayer;

use crate::cors::CorsPolicy;
use crate::error::{ApiError, BootstrapError};

/// The application under construction: title/version metadata, route table,
/// and optional CORS policy.
pub struct App {
    title: String,
    version: String,
    routes: HashMap<String, MethodRouter>,
    registered: HashSet<(Method, String)>,
    cors: Option<CorsPolicy>,
}

impl App {
    /// Create an application value. Pure construction; routes and policy are
    /// added through [`App::route`] and [`App::with_cors`].
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            routes: HashMap::new(),
            registered: HashSet::new(),
            cors: None,
        }
    }

    /// Attach the CORS policy. The policy is immutable once attached;
    /// attaching a second one is rejected.
    pub fn with_cors(mut self, policy: CorsPolicy) -> Result<Self, BootstrapError> {
        if self.cors.is_some() {
            return Err(BootstrapError::CorsAlreadyAttached);
        }
        self.cors = Some(policy);
        Ok(self)
    }

    /// Register a handler for `(method, path)`.
    ///
    /// Registering the same pair twice indicates a programming error in
    /// route table construction and fails the bootstrap. Distinct methods
    /// on the same path merge onto one path entry.
    pub fn route<H, T>(mut self, method: Method, path: &str, handler: H) -> Result<Self, BootstrapError>
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| BootstrapError::UnsupportedMethod(method.clone()))?;

        if !self.registered.insert((method.clone(), path.to_string())) {
            return Err(BootstrapError::DuplicateRoute {
                method,
                path: path.to_string(),
            });
        }

        let method_router = on(filter, handler);
        let merged = match self.routes.remove(path) {
            Some(existing) => existing.merge(method_router),
            None => method_router,
        };
        self.routes.insert(path.to_string(), merged);
        Ok(self)
    }

    /// Fold the route table into an Axum router.
    ///
    /// The CORS layer wraps outermost so the policy is evaluated before any
    /// route handler (the 404 fallback included) on every request,
    /// preflight included.
    pub fn into_router(self) -> Router {
        tracing::debug!(
            title = %self.title,
            version = %self.version,
            routes = self.registered.len(),
            "application bootstrapped"
        );

        let mut router = Router::new();
        for (path, method_router) in self.routes {
            router = router.route(&path, method_router);
        }
        router = router
            .fallback(not_found)
            .layer(TraceLayer::new_for_http());

        match self.cors {
            Some(policy) => router.layer(policy.into_layer()),
            None => router,
        }
    }
}

/// Fallback for unregistered paths.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {uri}"))
}
