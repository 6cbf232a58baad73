//! API Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use gearguard_support::{
    BoardLanes, Notification, SupportError, Ticket,
};
use gearguard_telemetry::{Asset, HealthSnapshot, TeamMember};

use crate::models::*;
use crate::{auth, AppState};

pub async fn health() -> &'static str {
    "OK"
}

// Auth

pub async fn login(
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let username = input.username.trim();
    if username.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    // Password intentionally unchecked; the login is simulated.
    let token = auth::create_token(username).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    info!(username, "operator logged in");
    Ok(Json(LoginResponse {
        token,
        username: username.to_string(),
    }))
}

// Tickets

pub async fn list_tickets(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Json<Vec<Ticket>> {
    let tickets = state.tickets.read().await;
    Json(tickets.filter(params.q.as_deref().unwrap_or("")))
}

pub async fn get_ticket(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Ticket>, StatusCode> {
    let tickets = state.tickets.read().await;
    tickets
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_ticket(
    State(state): State<AppState>,
    Json(input): Json<TicketCreate>,
) -> Result<(StatusCode, Json<Ticket>), StatusCode> {
    let equipment_name = input.equipment_name.trim();
    if equipment_name.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let ticket = state
        .tickets
        .write()
        .await
        .create(equipment_name, input.priority);
    state
        .notifications
        .write()
        .await
        .push(Notification::ticket_created(&ticket));

    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn move_ticket(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(input): Json<MoveRequest>,
) -> Result<Json<Ticket>, StatusCode> {
    let mut tickets = state.tickets.write().await;
    match tickets.move_ticket(&id, input.status) {
        Ok(()) => {
            let moved = tickets.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
            Ok(Json(moved))
        }
        Err(SupportError::TicketNotFound(_)) => Err(StatusCode::NOT_FOUND),
    }
}

pub async fn board(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Json<BoardLanes> {
    let tickets = state.tickets.read().await;
    Json(tickets.board(params.q.as_deref().unwrap_or("")))
}

// Notifications

pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    let log = state.notifications.read().await;
    Json(log.all().to_vec())
}

pub async fn clear_notifications(State(state): State<AppState>) -> StatusCode {
    state.notifications.write().await.clear_all();
    StatusCode::NO_CONTENT
}

pub async fn unread_count(State(state): State<AppState>) -> Json<UnreadCount> {
    let log = state.notifications.read().await;
    Json(UnreadCount {
        count: log.unread_count(),
    })
}

// Advisory + anomaly scan

pub async fn advisory(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryRequest>,
) -> Json<AdvisoryReply> {
    let reply = state.advisory.ask(&input.prompt).await;
    Json(AdvisoryReply { reply })
}

pub async fn run_scan(State(state): State<AppState>) -> (StatusCode, Json<ScanResponse>) {
    let finding = state.scanner.run_scan();

    let ticket = state
        .tickets
        .write()
        .await
        .create_from_scan(&finding.equipment_name);
    let notification = Notification::anomaly_detected(&finding.equipment_name);
    state
        .notifications
        .write()
        .await
        .push(notification.clone());

    (
        StatusCode::CREATED,
        Json(ScanResponse {
            ticket,
            notification,
        }),
    )
}

// Telemetry

pub async fn list_equipment(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(state.registry.assets().to_vec())
}

pub async fn health_snapshots(State(state): State<AppState>) -> Json<Vec<HealthSnapshot>> {
    Json(state.registry.health_snapshots().to_vec())
}

pub async fn list_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.registry.team().to_vec())
}

pub async fn stats_overview(State(state): State<AppState>) -> Json<StatsOverview> {
    let tickets = state.tickets.read().await;
    Json(StatsOverview {
        fleet_health_index: state.registry.fleet_health_index(),
        open_high_priority: tickets.open_high_priority_count(),
        overdue: tickets.overdue_count(),
        avg_response: "2.5h".into(),
    })
}
