//! Ticket entity and workflow enums

use serde::{Deserialize, Serialize};

/// A unit of maintenance work tracked on the kanban board.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub equipment_name: String,
    pub technician: Technician,
    pub priority: Priority,
    pub status: KanbanStatus,
    pub is_overdue: bool,
    pub created_at: String,
}

/// Assigned worker, identified by name and presence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technician {
    pub name: String,
    pub avatar: String,
    pub status: TechnicianStatus,
}

impl Technician {
    pub fn new(name: impl Into<String>, status: TechnicianStatus) -> Self {
        Self {
            name: name.into(),
            avatar: "simple".into(),
            status,
        }
    }

    /// Placeholder assignee given to tickets raised from the request form.
    pub fn default_assignee() -> Self {
        Self::new("Rajesh M.", TechnicianStatus::Online)
    }

    /// Synthetic assignee for tickets raised by the anomaly scanner.
    pub fn ai_core() -> Self {
        Self::new("AI Core", TechnicianStatus::Online)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TechnicianStatus {
    #[default]
    Online,
    Offline,
}

/// Severity assigned at creation; never changed algorithmically.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

/// The sole mutable workflow field on a ticket.
///
/// The four statuses form a complete graph: any status may move to any
/// other, including back to `New`. The workflow deliberately imposes no
/// forbidden edges.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KanbanStatus {
    #[default]
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl KanbanStatus {
    /// All four lanes, in board order.
    pub const ALL: [KanbanStatus; 4] = [
        KanbanStatus::New,
        KanbanStatus::InProgress,
        KanbanStatus::Repaired,
        KanbanStatus::Scrap,
    ];
}

impl Ticket {
    /// True for tickets still on the active side of the board.
    pub fn is_open(&self) -> bool {
        matches!(self.status, KanbanStatus::New | KanbanStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_like_the_board_expects() {
        let json = serde_json::to_string(&KanbanStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: KanbanStatus = serde_json::from_str("\"SCRAP\"").unwrap();
        assert_eq!(back, KanbanStatus::Scrap);
    }

    #[test]
    fn priority_round_trips() {
        for p in [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            let back: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn open_covers_new_and_in_progress_only() {
        let mut t = Ticket {
            id: "GG-001".into(),
            equipment_name: "CNC Mill - Alpha 3".into(),
            technician: Technician::default_assignee(),
            priority: Priority::Critical,
            status: KanbanStatus::New,
            is_overdue: false,
            created_at: "just now".into(),
        };
        assert!(t.is_open());
        t.status = KanbanStatus::InProgress;
        assert!(t.is_open());
        t.status = KanbanStatus::Repaired;
        assert!(!t.is_open());
        t.status = KanbanStatus::Scrap;
        assert!(!t.is_open());
    }
}
