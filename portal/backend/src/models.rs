//! Portal request/response models
//!
//! Domain entities come from the `gearguard-support` and
//! `gearguard-telemetry` crates; these are the DTOs specific to the HTTP
//! surface.

use serde::{Deserialize, Serialize};

use gearguard_support::{KanbanStatus, Notification, Priority, Ticket};

/// Ticket creation form. Equipment name is required non-empty at this
/// boundary; the store itself accepts anything.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreate {
    pub equipment_name: String,
    pub priority: Priority,
}

/// Target lane for a ticket move.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub status: KanbanStatus,
}

/// Search box query. Absent or empty means "everything".
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdvisoryRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisoryReply {
    pub reply: String,
}

/// What a scan pass produced: the auto-detected ticket plus the alert
/// pushed to the feed.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub ticket: Ticket,
    pub notification: Notification,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Overview stat cards. Health index and ticket counts are derived live;
/// the response-latency figure is a fixed display string like the rest of
/// the mock telemetry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub fleet_health_index: u8,
    pub open_high_priority: usize,
    pub overdue: usize,
    pub avg_response: String,
}
