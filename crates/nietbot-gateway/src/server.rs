//! HTTP server implementation using Axum.

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use nietbot_agent::Agent;
use nietbot_core::config::GatewayConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server. Read-only, no locks.
pub struct AppState {
    pub gateway_config: GatewayConfig,
    pub agent: Arc<Agent>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(gateway_config: GatewayConfig, agent: Arc<Agent>) -> Self {
        Self {
            gateway_config,
            agent,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Allowed origins: `NIETBOT_CORS_ORIGINS` (comma separated) wins over config.
fn cors_origins(config: &GatewayConfig) -> Vec<HeaderValue> {
    let env_list = std::env::var("NIETBOT_CORS_ORIGINS").ok();
    parse_origins(&config.cors_origins, env_list.as_deref())
}

/// Empty and unparsable entries are dropped.
fn parse_origins(configured: &[String], env_list: Option<&str>) -> Vec<HeaderValue> {
    let entries: Vec<&str> = match env_list {
        Some(list) => list.split(',').map(str::trim).collect(),
        None => configured.iter().map(|s| s.trim()).collect(),
    };
    entries
        .into_iter()
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect()
}

fn cors_layer(config: &GatewayConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let origins = cors_origins(config);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Build the Axum router with all routes.
pub fn build_router(shared: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(super::routes::home))
        .route("/health", get(super::routes::health_check))
        .route("/chat", post(super::routes::chat))
        .layer(cors_layer(&shared.gateway_config))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server. Runs until the listener fails.
pub async fn start(config: &GatewayConfig, agent: Arc<Agent>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config.clone(), agent));
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
