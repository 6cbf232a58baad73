//! GearGuard Portal API Backend
//!
//! Rust/Axum API gateway for the maintenance dashboard.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearguard_advisory::{AdvisoryClient, AdvisoryConfig};
use gearguard_portal::{build_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AdvisoryConfig::from_env().unwrap_or_else(|_| {
        tracing::warn!("GEMINI_API_KEY not set, advisory replies will use the fallback");
        AdvisoryConfig::new("")
    });
    let state = AppState::new(AdvisoryClient::new(config));

    let app = build_router(state);

    let addr = std::env::var("GEARGUARD_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    tracing::info!("Portal API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
