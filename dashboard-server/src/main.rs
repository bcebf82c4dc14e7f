//! Threat Dashboard Server
//!
//! Serves the dashboard page with its wasm widget bundle and the
//! `/api/threat-map` feed the map widget polls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    THREAT DASHBOARD                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  Static   │  │  Threat Map   │  │  Health             │ │
//! │  │  (ServeDir)│ │  (/api/...)   │  │                     │ │
//! │  └───────────┘  └───────┬───────┘  └─────────────────────┘ │
//! │                         ▼                                   │
//! │                ┌─────────────────┐                         │
//! │                │ AbuseIPDB API   │                         │
//! │                └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod services;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
    services::ServeDir,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

use services::abuseipdb::AbuseIpDbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dashboard_server=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Threat Dashboard Server starting...");
    tracing::info!("Static files: {}", config.static_dir);
    if config.abuseipdb_api_key.is_none() {
        tracing::warn!("ABUSEIPDB_API_KEY not set, /api/threat-map will return []");
    }

    // Build application state
    let state = AppState::new(config.clone())?;

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub threat_intel: AbuseIpDbClient,
}

impl AppState {
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let threat_intel = AbuseIpDbClient::new(&config)?;
        Ok(Self { config, threat_intel })
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let api_routes = Router::new()
        .route("/api/threat-map", get(handlers::threat_map::list))
        .route("/api/*path", any(handlers::api_not_found));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app(static_dir: &str) -> Router {
        let config = config::Config {
            static_dir: static_dir.to_string(),
            ..config::Config::default()
        };
        create_router(AppState::new(config).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_threat_map_empty_without_key() {
        let (status, body) = get_json(test_app("static"), "/api/threat-map").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(test_app("static"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["threat_feed"], false);
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_json_404() {
        let (status, body) = get_json(test_app("static"), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = std::env::temp_dir().join(format!("dashboard-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();

        let app = test_app(dir.to_str().unwrap());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>dashboard</html>");

        std::fs::remove_dir_all(&dir).ok();
    }
}
