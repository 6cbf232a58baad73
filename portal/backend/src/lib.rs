//! GearGuard Portal API Backend
//!
//! Rust/Axum API gateway for the maintenance dashboard: the kanban ticket
//! board, the notification feed, mock fleet telemetry, and the GearGuard AI
//! advisory bridge.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gearguard_advisory::AdvisoryClient;
use gearguard_support::{NotificationLog, TicketStore};
use gearguard_telemetry::{AnomalyScanner, EquipmentRegistry};

pub mod auth;
pub mod handlers;
pub mod models;
pub mod ws;

use handlers::*;

/// Shared portal state: one writer per request, readers behind the same
/// locks. Everything lives in process memory for the session.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<RwLock<TicketStore>>,
    pub notifications: Arc<RwLock<NotificationLog>>,
    pub registry: Arc<EquipmentRegistry>,
    pub scanner: Arc<AnomalyScanner>,
    pub advisory: Arc<AdvisoryClient>,
}

impl AppState {
    /// State seeded with the demo board the dashboard boots with.
    pub fn new(advisory: AdvisoryClient) -> Self {
        Self {
            tickets: Arc::new(RwLock::new(TicketStore::with_demo_data())),
            notifications: Arc::new(RwLock::new(NotificationLog::with_demo_data())),
            registry: Arc::new(EquipmentRegistry::new()),
            scanner: Arc::new(AnomalyScanner::new()),
            advisory: Arc::new(advisory),
        }
    }

    /// State starting from an empty board.
    pub fn empty(advisory: AdvisoryClient) -> Self {
        Self {
            tickets: Arc::new(RwLock::new(TicketStore::new())),
            notifications: Arc::new(RwLock::new(NotificationLog::new())),
            registry: Arc::new(EquipmentRegistry::new()),
            scanner: Arc::new(AnomalyScanner::new()),
            advisory: Arc::new(advisory),
        }
    }
}

/// Build the portal router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Auth (simulated login)
        .route("/api/auth/login", post(login))
        // Tickets
        .route("/api/tickets", get(list_tickets).post(create_ticket))
        .route("/api/tickets/:id", get(get_ticket))
        .route("/api/tickets/:id/status", put(move_ticket))
        .route("/api/board", get(board))
        // Notifications
        .route(
            "/api/notifications",
            get(list_notifications).delete(clear_notifications),
        )
        .route("/api/notifications/unread_count", get(unread_count))
        // Advisory + anomaly scan
        .route("/api/advisory", post(advisory))
        .route("/api/scan", post(run_scan))
        // Telemetry
        .route("/api/equipment", get(list_equipment))
        .route("/api/equipment/health", get(health_snapshots))
        .route("/api/team", get(list_team))
        .route("/api/stats/overview", get(stats_overview))
        // WebSocket
        .route("/ws", get(ws::ws_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
