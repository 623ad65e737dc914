//! Expert Gateway - lookup API and profile pages over a managed data platform.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expert_gateway::{
    auth::RestSessionProvider,
    config::Config,
    lookup::ExpertLookup,
    server::{create_router, AppState, RouterConfig},
    store::RestExpertStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Backend: {}", config.backend_url);
    info!("  Max sub_id values per lookup: {}", config.max_sub_ids);
    if let Some(ref origins) = config.cors_origins {
        info!("  CORS origins: {}", origins.join(", "));
    } else {
        info!("  CORS origins: any");
    }

    let client = reqwest::Client::new();

    // Probe the platform so a bad URL or key fails at startup, not on the
    // first caller's request
    info!("Connecting to backend platform...");
    if let Err(e) = probe_backend(&client, &config).await {
        error!("  Failed to reach backend: {}", e);
        error!("");
        error!("  Please check:");
        error!("    - The backend URL '{}' is correct", config.backend_url);
        error!("    - The service key is valid for this project");
        return ExitCode::FAILURE;
    }
    info!("  Connected successfully");

    let store = RestExpertStore::new(client.clone(), &config.backend_url, &config.backend_key);
    let sessions =
        RestSessionProvider::new(client, &config.backend_url, &config.backend_key);

    let state = AppState::new(ExpertLookup::new(store), sessions, config.max_sub_ids);
    let router = create_router(state, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("Server listening on: http://{}", addr);
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl 'http://{}/api/experts?sub_id=<id>'", addr);
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Check that the platform's REST surface answers at all.
async fn probe_backend(client: &reqwest::Client, config: &Config) -> Result<(), String> {
    let url = format!("{}/rest/v1/", config.backend_url.trim_end_matches('/'));

    let response = client
        .get(&url)
        .header("apikey", &config.backend_key)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if status.is_client_error() && status != reqwest::StatusCode::NOT_FOUND {
        return Err(format!("backend rejected the service key ({})", status));
    }

    Ok(())
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "expert_gateway=debug,tower_http=debug"
    } else {
        "expert_gateway=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::new().with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}
