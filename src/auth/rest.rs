//! REST-backed implementation of [`SessionProvider`].
//!
//! Session data is materialized locally from the platform cookie; the user
//! is confirmed by calling the provider's `/auth/v1/user` endpoint with the
//! session's access token.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::AuthError;

use super::{decode_session, session_cookie_value, AuthSession, AuthUser, SessionProvider};

/// REST client for the platform's auth provider.
#[derive(Clone)]
pub struct RestSessionProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestSessionProvider {
    /// Create a new provider client.
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `base_url` - Platform base URL (e.g. `https://xyz.example.co`)
    /// * `api_key` - Service key sent with every request
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }

    /// Pull the session out of the request cookies, if any.
    fn session_from_cookies(
        &self,
        cookies: Option<&str>,
    ) -> Result<Option<AuthSession>, AuthError> {
        let Some(value) = cookies.and_then(session_cookie_value) else {
            return Ok(None);
        };
        decode_session(value).map(Some)
    }
}

#[async_trait]
impl SessionProvider for RestSessionProvider {
    async fn current_user(&self, cookies: Option<&str>) -> Result<Option<AuthUser>, AuthError> {
        let Some(session) = self.session_from_cookies(cookies)? else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.user_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| AuthError::Connection(e.to_string()))?;

        let status = response.status();

        // A rejected token means "not signed in", not a provider failure
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("msg")
                        .or_else(|| v.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(body);
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let user = response
            .json::<AuthUser>()
            .await
            .map_err(|e| AuthError::Upstream {
                status: status.as_u16(),
                message: format!("invalid user payload: {}", e),
            })?;

        Ok(Some(user))
    }

    async fn current_session(
        &self,
        cookies: Option<&str>,
    ) -> Result<Option<AuthSession>, AuthError> {
        self.session_from_cookies(cookies)
    }
}

// =============================================================================
// Tests
// =============================================================================
