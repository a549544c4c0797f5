//! Diabetes Risk Service
//!
//! Backend for the diabetes prediction form: validates submitted metrics,
//! forwards them to the remote prediction model, and scores them locally
//! with a deterministic heuristic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   DIABETES RISK SERVICE                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Form     │  │  Risk Scorer            │ │
//! │  │  Gateway  │  │  Checks   │  │  (pure, local)          │ │
//! │  │  (Axum)   │  │           │  │                         │ │
//! │  └─────┬─────┘  └─────┬─────┘  └─────────────────────────┘ │
//! │        └──────────────┘                                     │
//! │                       ▼                                     │
//! │              ┌──────────────────┐                           │
//! │              │ Prediction API   │  (remote, reqwest)        │
//! │              └──────────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;
mod prediction_client;
mod report;
mod scoring;

use axum::{
    Router,
    routing::{get, post},
    http::{header, HeaderValue, Method},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::net::SocketAddr;

use prediction_client::PredictionClient;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_logging(&config);

    tracing::info!("Diabetes Risk Service starting...");
    tracing::info!("Prediction API: {}", config.prediction_api_url);

    let client = PredictionClient::new(config.client_config())?;

    // Startup health check, informational only; the UI polls /api/health itself
    tokio::spawn(log_prediction_api_health(client.clone()));

    // Build application state
    let state = AppState {
        config: config.clone(),
        client,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn log_prediction_api_health(client: PredictionClient) {
    match client.health_check().await {
        Ok(health) if health.is_healthy() => tracing::info!("Prediction API healthy: {}", health.display_message()),
        Ok(health) => tracing::warn!("Prediction API unhealthy: {}", health.display_message()),
        Err(e) => tracing::warn!("Prediction API unreachable: {}", e.details()),
    }
}

fn init_logging(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "diabetes_risk=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: PredictionClient,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/health", get(handlers::health::prediction_api))
        .route("/api/features", get(handlers::features::list))
        .route("/api/assess", post(handlers::assess::assess))
        .route("/api/report", post(handlers::assess::report))
        .route("/api/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        )
        .with_state(state)
}
