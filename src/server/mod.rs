//! Axum-based HTTP server for the expert gateway.
//!
//! # Endpoints
//!
//! - `GET /api/experts` - Filtered expert lookup (JSON)
//! - `GET /profile`     - Server-rendered profile page (HTML)
//! - `GET /about`       - Server-rendered about page (HTML)
//! - `GET /health`      - Health check (JSON)

pub mod about;
pub mod handlers;
pub mod pages;
pub mod profile;
pub mod routes;

pub use handlers::{
    about_handler, experts_handler, health_handler, method_not_allowed, profile_handler, AppState,
    ErrorEnvelope, ExpertsError, ExpertsQueryParams, HealthResponse,
};
pub use routes::{create_router, RouterConfig};
