//! Test utilities for integration tests.
//!
//! Provides mock store and session-provider implementations plus helpers
//! for building the router under test.

use async_trait::async_trait;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use expert_gateway::auth::{AuthSession, AuthUser, SessionProvider};
use expert_gateway::error::{AuthError, StoreError};
use expert_gateway::lookup::{ExpertLookup, DEFAULT_MAX_SUB_IDS};
use expert_gateway::server::{create_router, AppState, RouterConfig};
use expert_gateway::store::ExpertStore;

// =============================================================================
// Mock Expert Store
// =============================================================================

/// A recorded store call: the forwarded field list and identifier list.
pub type RecordedQuery = (Vec<String>, Vec<String>);

/// A mock expert store that serves pre-configured rows and records every
/// query it receives.
#[derive(Clone)]
pub struct MockExpertStore {
    rows: Vec<Value>,
    failure: Option<StoreError>,
    panics: bool,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl MockExpertStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            failure: None,
            panics: false,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Value>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_failure(mut self, failure: StoreError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Make every fetch panic instead of returning.
    pub fn with_panic(mut self) -> Self {
        self.panics = true;
        self
    }

    pub fn queries(&self) -> Vec<RecordedQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl Default for MockExpertStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpertStore for MockExpertStore {
    async fn fetch_experts(
        &self,
        fields: &[String],
        sub_ids: &[String],
    ) -> Result<Vec<Value>, StoreError> {
        self.queries
            .lock()
            .unwrap()
            .push((fields.to_vec(), sub_ids.to_vec()));

        if self.panics {
            panic!("store blew up");
        }

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.rows.clone()),
        }
    }
}

// =============================================================================
// Mock Session Provider
// =============================================================================

/// A mock session provider serving fixed user/session outcomes.
#[derive(Clone, Default)]
pub struct MockSessionProvider {
    user: Option<AuthUser>,
    session: Option<AuthSession>,
    user_failure: Option<AuthError>,
    session_failure: Option<AuthError>,
}

impl MockSessionProvider {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: AuthUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_session(mut self, session: AuthSession) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_user_failure(mut self, failure: AuthError) -> Self {
        self.user_failure = Some(failure);
        self
    }

    pub fn with_session_failure(mut self, failure: AuthError) -> Self {
        self.session_failure = Some(failure);
        self
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn current_user(&self, _cookies: Option<&str>) -> Result<Option<AuthUser>, AuthError> {
        match &self.user_failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.user.clone()),
        }
    }

    async fn current_session(
        &self,
        _cookies: Option<&str>,
    ) -> Result<Option<AuthSession>, AuthError> {
        match &self.session_failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.session.clone()),
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn test_user() -> AuthUser {
    AuthUser {
        id: "user-001".to_string(),
        email: Some("ada@example.com".to_string()),
        created_at: Some("2024-01-15T09:30:00Z".to_string()),
        last_sign_in_at: Some("2024-06-01T08:00:00Z".to_string()),
    }
}

pub fn test_session() -> AuthSession {
    AuthSession {
        access_token: "access-token-abcdefghijklmnopqrstuvwxyz".to_string(),
        token_type: "bearer".to_string(),
        expires_at: Some(1_900_000_000),
        refresh_token: Some("refresh-token-0123456789".to_string()),
        provider_token: None,
        provider_refresh_token: None,
    }
}

/// Build a router around the given mocks with tracing disabled.
pub fn test_router(store: MockExpertStore, sessions: MockSessionProvider) -> Router {
    let state = AppState::new(ExpertLookup::new(store), sessions, DEFAULT_MAX_SUB_IDS);
    create_router(state, RouterConfig::new().with_tracing(false))
}

/// Build a router with a custom identifier cap.
pub fn test_router_with_cap(
    store: MockExpertStore,
    sessions: MockSessionProvider,
    max_sub_ids: usize,
) -> Router {
    let state = AppState::new(ExpertLookup::new(store), sessions, max_sub_ids);
    create_router(state, RouterConfig::new().with_tracing(false))
}

/// Collect a response body into a UTF-8 string.
pub async fn body_string(body: axum::body::Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(body: axum::body::Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
