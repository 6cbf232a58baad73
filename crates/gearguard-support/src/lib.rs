//! GearGuard Maintenance Ticket Platform
//!
//! Owns the kanban ticket collection and the notification log behind the
//! maintenance portal.
//!
//! ## Features
//! - Ticket creation with `GG-###` identifiers
//! - Unconstrained four-status kanban workflow
//! - Case-insensitive search over asset names and ids
//! - Board grouping into fixed status lanes
//! - Append-only notification log with bulk clear

use thiserror::Error;

pub mod notifications;
pub mod store;
pub mod ticket;

pub use notifications::{Notification, NotificationKind, NotificationLog};
pub use store::{BoardLanes, TicketStore};
pub use ticket::{KanbanStatus, Priority, Technician, TechnicianStatus, Ticket};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SupportError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),
}

pub type Result<T> = std::result::Result<T, SupportError>;
