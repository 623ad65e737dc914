//! Authentication/session provider boundary.
//!
//! The gateway never issues, refreshes, or validates tokens itself. Session
//! material arrives as a cookie written by the platform's own client, and
//! the current user is confirmed by asking the provider over HTTP. The
//! [`SessionProvider`] trait is the seam; [`RestSessionProvider`] is the
//! production implementation and tests substitute mocks.

mod rest;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

pub use rest::RestSessionProvider;

/// Name of the cookie carrying the serialized session.
pub const SESSION_COOKIE: &str = "eg-session";

// =============================================================================
// Provider Data
// =============================================================================

/// The authenticated user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Stable user identifier
    pub id: String,

    /// Email address, if the provider has one on file
    #[serde(default)]
    pub email: Option<String>,

    /// Account creation timestamp (provider's own formatting, rendered as-is)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last sign-in timestamp
    #[serde(default)]
    pub last_sign_in_at: Option<String>,
}

/// Session data as issued by the provider.
///
/// Carried opaquely; the gateway reads fields for display but never
/// validates or refreshes tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token used against the provider
    pub access_token: String,

    /// Token type, normally "bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Expiry as a unix timestamp in seconds
    #[serde(default)]
    pub expires_at: Option<i64>,

    /// Refresh token, if issued
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// OAuth provider token, if the session came from an OAuth flow
    #[serde(default)]
    pub provider_token: Option<String>,

    /// OAuth provider refresh token
    #[serde(default)]
    pub provider_refresh_token: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

// =============================================================================
// SessionProvider Trait
// =============================================================================

/// Trait for reading the caller's authentication state.
///
/// Both methods take the raw `Cookie` header so they are mutually
/// independent and can be dispatched concurrently. `Ok(None)` means "not
/// signed in" and is not an error.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the current user for the request, confirming the access
    /// token with the provider.
    async fn current_user(&self, cookies: Option<&str>) -> Result<Option<AuthUser>, AuthError>;

    /// Materialize the current session attached to the request.
    async fn current_session(
        &self,
        cookies: Option<&str>,
    ) -> Result<Option<AuthSession>, AuthError>;
}

// =============================================================================
// Cookie Handling
// =============================================================================

/// Extract the session cookie value from a raw `Cookie` header.
pub fn session_cookie_value(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

/// Decode a session cookie value (URL-safe base64 over the session JSON).
pub fn decode_session(value: &str) -> Result<AuthSession, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| AuthError::InvalidSession(format!("cookie is not valid base64: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidSession(format!("cookie is not a session: {}", e)))
}

/// Encode a session into a cookie value. Used by tests and tooling.
pub fn encode_session(session: &AuthSession) -> String {
    // Serializing a plain struct with string/number fields cannot fail
    let json = serde_json::to_vec(session).expect("session serializes");
    URL_SAFE_NO_PAD.encode(json)
}

// =============================================================================
// Tests
// =============================================================================
