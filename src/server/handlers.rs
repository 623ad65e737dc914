//! HTTP request handlers for the expert gateway.
//!
//! This module contains the Axum handlers for the lookup API, the rendered
//! pages, and the health check, plus the error-to-response mapping.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::auth::SessionProvider;
use crate::error::LookupError;
use crate::lookup::{ExpertLookup, LookupRequest};
use crate::store::ExpertStore;

use super::{about, profile};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State extractor.
pub struct AppState<S: ExpertStore, P: SessionProvider> {
    /// The lookup dispatcher for the experts API; already cheap to clone
    pub lookup: ExpertLookup<S>,

    /// The session provider for the profile page
    pub sessions: Arc<P>,

    /// Cap on identifiers accepted per lookup request
    pub max_sub_ids: usize,
}

impl<S: ExpertStore, P: SessionProvider> AppState<S, P> {
    /// Create a new application state.
    pub fn new(lookup: ExpertLookup<S>, sessions: P, max_sub_ids: usize) -> Self {
        Self {
            lookup,
            sessions: Arc::new(sessions),
            max_sub_ids,
        }
    }
}

impl<S: ExpertStore, P: SessionProvider> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
            sessions: Arc::clone(&self.sessions),
            max_sub_ids: self.max_sub_ids,
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Query parameters for the experts lookup endpoint.
///
/// Both parameters arrive as raw comma-separated strings; splitting and
/// validation happen in [`LookupRequest::from_query`].
#[derive(Debug, Default)]
pub struct ExpertsQueryParams {
    /// Comma-separated identifier list (required)
    pub sub_id: Option<String>,

    /// Comma-separated field list (optional, defaults to "orcid")
    pub select: Option<String>,
}

impl ExpertsQueryParams {
    /// Parse the raw query string, percent-decoding values.
    ///
    /// When a parameter is repeated the first occurrence wins and the rest
    /// are ignored; unknown parameters are ignored too. Parsing itself never
    /// fails, so every error the endpoint produces goes through the JSON
    /// envelope.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(raw) = raw else {
            return params;
        };

        for (name, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match name.as_ref() {
                "sub_id" if params.sub_id.is_none() => params.sub_id = Some(value.into_owned()),
                "select" if params.select.is_none() => params.select = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error envelope returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Human-readable error message
    pub error: String,

    /// Upstream detail, present only for data-layer failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    /// Create an envelope with just a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Create an envelope carrying an upstream detail message.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Wrapper for lookup errors to implement IntoResponse.
///
/// Validation failures map to 400 and are logged at WARN; store failures map
/// to 500 with the store's message under `details` and are logged at ERROR.
pub struct ExpertsError(pub LookupError);

impl From<LookupError> for ExpertsError {
    fn from(err: LookupError) -> Self {
        ExpertsError(err)
    }
}

impl IntoResponse for ExpertsError {
    fn into_response(self) -> Response {
        let (status, envelope) = match &self.0 {
            LookupError::MissingSubIds | LookupError::TooManySubIds { .. } => {
                warn!(status = 400, "Client error: {}", self.0);
                (StatusCode::BAD_REQUEST, ErrorEnvelope::new(self.0.to_string()))
            }
            LookupError::Store(store_err) => {
                error!(status = 500, "Store read failed: {}", store_err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::with_details(
                        "Failed to fetch experts from database",
                        store_err.to_string(),
                    ),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle expert lookup requests.
///
/// # Endpoint
///
/// `GET /api/experts`
///
/// # Query Parameters
///
/// - `sub_id`: Comma-separated identifier list (required)
/// - `select`: Comma-separated field list (default: "orcid")
///
/// # Response
///
/// - `200 OK`: JSON array of row objects (possibly empty)
/// - `400 Bad Request`: `sub_id` missing or empty after trimming
/// - `500 Internal Server Error`: store read failed; the store's message is
///   included under `details`
pub async fn experts_handler<S: ExpertStore, P: SessionProvider>(
    State(state): State<AppState<S, P>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Value>>, ExpertsError> {
    let params = ExpertsQueryParams::from_raw(query.as_deref());

    let request = LookupRequest::from_query(
        params.sub_id.as_deref(),
        params.select.as_deref(),
        state.max_sub_ids,
    )?;

    let rows = state.lookup.fetch(&request).await.map_err(LookupError::from)?;

    Ok(Json(rows))
}

/// Respond 405 for disallowed HTTP verbs on the experts endpoint.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorEnvelope::new("Method not allowed")),
    )
        .into_response()
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle the about page.
///
/// # Endpoint
///
/// `GET /about`
///
/// Single-pass render of static content; never fails.
pub async fn about_handler() -> Html<String> {
    Html(about::render_about_html())
}

/// Handle the profile page.
///
/// # Endpoint
///
/// `GET /profile`
///
/// Reads the caller's user and session from the provider concurrently and
/// renders whichever outcome applies. Provider failures degrade to inline
/// error text rather than an error status; the page itself always renders.
pub async fn profile_handler<S: ExpertStore, P: SessionProvider>(
    State(state): State<AppState<S, P>>,
    headers: HeaderMap,
) -> Html<String> {
    let cookies = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());

    // The two reads are mutually independent; dispatch them together and
    // wait for both before rendering.
    let (user_result, session_result) = tokio::join!(
        state.sessions.current_user(cookies),
        state.sessions.current_session(cookies),
    );

    let user = match user_result {
        Ok(user) => user,
        Err(e) => {
            error!("User lookup failed: {}", e);
            return Html(profile::render_error_html(&e.to_string()));
        }
    };

    let session = match session_result {
        Ok(session) => session,
        Err(e) => {
            error!("Session lookup failed: {}", e);
            return Html(profile::render_error_html(&e.to_string()));
        }
    };

    let Some(user) = user else {
        return Html(profile::render_sign_in_html());
    };

    Html(profile::render_profile_html(&user, session.as_ref()))
}

// =============================================================================
// Tests
// =============================================================================
