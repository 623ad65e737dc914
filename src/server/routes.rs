//! Router configuration for the expert gateway.
//!
//! This module defines the HTTP routes and applies the CORS, tracing, and
//! panic-recovery middleware.
//!
//! # Route Structure
//!
//! ```text
//! /health        - Health check
//! /api/experts   - Expert lookup API (GET only; other verbs get 405)
//! /about         - About page
//! /profile       - Profile page
//! ```

use std::any::Any;
use std::time::Duration;

use axum::{body::Body, routing::get, Router};
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Response, StatusCode};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::auth::SessionProvider;
use crate::store::ExpertStore;

use super::handlers::{
    about_handler, experts_handler, health_handler, method_not_allowed, profile_handler, AppState,
    ErrorEnvelope,
};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with defaults: CORS allows any origin
    /// and tracing is enabled.
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// The experts endpoint accepts GET only; any other verb falls through to a
/// JSON 405. A catch-panic layer converts anything a handler did not
/// anticipate into a generic JSON 500 with no internal detail leaked.
pub fn create_router<S, P>(state: AppState<S, P>, config: RouterConfig) -> Router
where
    S: ExpertStore + 'static,
    P: SessionProvider + 'static,
{
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/experts",
            get(experts_handler::<S, P>).fallback(method_not_allowed),
        )
        .route("/about", get(about_handler))
        .route("/profile", get(profile_handler::<S, P>))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Convert an unexpected panic into the generic 500 envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    // Logged for operator visibility only; the caller sees a fixed message
    error!("Unhandled panic in request handler: {}", detail);

    let body = serde_json::to_string(&ErrorEnvelope::new("Internal server error"))
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400));

    match &config.cors_origins {
        None => cors.allow_origin(AnyOrigin),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
