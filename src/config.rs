//! Configuration management for the expert gateway.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `EXPERT_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Environment Variables
//!
//! - `EXPERT_HOST` - Server bind address (default: 0.0.0.0)
//! - `EXPERT_PORT` - Server port (default: 3000)
//! - `EXPERT_BACKEND_URL` - Base URL of the managed data platform (required)
//! - `EXPERT_BACKEND_KEY` - Service key sent to the platform (required)
//! - `EXPERT_MAX_SUB_IDS` - Cap on identifiers per lookup (default: 200)
//! - `EXPERT_CORS_ORIGINS` - Allowed CORS origins (comma-separated)

use clap::Parser;

use crate::lookup::DEFAULT_MAX_SUB_IDS;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Expert Gateway - lookup API and profile pages over a managed data platform.
///
/// Serves the `/api/experts` lookup endpoint plus server-rendered `/about`
/// and `/profile` pages. All persistence and session issuance is delegated
/// to the external platform reachable at the backend URL.
#[derive(Parser, Debug, Clone)]
#[command(name = "expert-gateway")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "EXPERT_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "EXPERT_PORT")]
    pub port: u16,

    // =========================================================================
    // Backend Platform Configuration
    // =========================================================================
    /// Base URL of the managed data platform (e.g. https://xyz.example.co).
    ///
    /// The REST store is reached under `{url}/rest/v1` and the auth provider
    /// under `{url}/auth/v1`.
    #[arg(long, env = "EXPERT_BACKEND_URL")]
    pub backend_url: String,

    /// Service key sent as `apikey` and bearer token on platform requests.
    #[arg(long, env = "EXPERT_BACKEND_KEY")]
    pub backend_key: String,

    // =========================================================================
    // Lookup Configuration
    // =========================================================================
    /// Maximum number of sub_id values accepted per lookup request.
    #[arg(long, default_value_t = DEFAULT_MAX_SUB_IDS, env = "EXPERT_MAX_SUB_IDS")]
    pub max_sub_ids: usize,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "EXPERT_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.backend_url.is_empty() {
            return Err(
                "Backend URL is required. Set --backend-url or EXPERT_BACKEND_URL".to_string(),
            );
        }

        // Must parse as an absolute http(s) URL
        match url::Url::parse(&self.backend_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => {
                return Err(format!(
                    "Backend URL must use http or https, got '{}'",
                    parsed.scheme()
                ));
            }
            Err(e) => return Err(format!("Invalid backend URL: {}", e)),
        }

        if self.backend_key.is_empty() {
            return Err(
                "Backend key is required. Set --backend-key or EXPERT_BACKEND_KEY".to_string(),
            );
        }

        if self.max_sub_ids == 0 {
            return Err("max_sub_ids must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
