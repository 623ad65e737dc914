//! # Expert Gateway
//!
//! A small web gateway in front of a managed data platform. It serves a
//! filtered expert-lookup API plus two server-rendered pages, delegating all
//! persistence and session issuance to the platform.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`lookup`] - Query parsing and the lookup dispatcher
//! - [`store`] - Expert store boundary and REST client
//! - [`auth`] - Session provider boundary and REST client
//! - [`server`] - Axum-based HTTP server, routes, and page rendering
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use expert_gateway::auth::RestSessionProvider;
//! use expert_gateway::lookup::ExpertLookup;
//! use expert_gateway::server::{create_router, AppState, RouterConfig};
//! use expert_gateway::store::RestExpertStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = reqwest::Client::new();
//!     let store = RestExpertStore::new(client.clone(), "https://xyz.example.co", "key");
//!     let sessions = RestSessionProvider::new(client, "https://xyz.example.co", "key");
//!
//!     let state = AppState::new(ExpertLookup::new(store), sessions, 200);
//!     let router = create_router(state, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod lookup;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use auth::{AuthSession, AuthUser, RestSessionProvider, SessionProvider, SESSION_COOKIE};
pub use config::Config;
pub use error::{AuthError, LookupError, StoreError};
pub use lookup::{ExpertLookup, LookupRequest, DEFAULT_MAX_SUB_IDS, DEFAULT_SELECT_FIELD};
pub use server::{create_router, AppState, ErrorEnvelope, HealthResponse, RouterConfig};
pub use store::{ExpertStore, RestExpertStore, EXPERT_COLLECTION, IDENTIFIER_COLUMN};
