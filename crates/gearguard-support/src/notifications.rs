//! Notification Log
//!
//! Append-only alert list shown in the portal top bar. Entries are
//! prepended (newest first); the only other mutation is a bulk clear.
//! Read status is fixed at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ticket::Ticket;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

impl Notification {
    /// Raised when a ticket is created from the request form.
    pub fn ticket_created(ticket: &Ticket) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "TICKET CREATED".into(),
            message: format!(
                "New request {} deployed for {}.",
                ticket.id, ticket.equipment_name
            ),
            time: "just now".into(),
            kind: NotificationKind::Info,
            is_read: false,
        }
    }

    /// Raised when the anomaly scanner flags an asset.
    pub fn anomaly_detected(equipment_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "ANOMALY DETECTED".into(),
            message: format!(
                "Neural scan identified critical failure risk in {equipment_name}."
            ),
            time: "just now".into(),
            kind: NotificationKind::Error,
            is_read: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log seeded with the alerts the demo portal boots with.
    pub fn with_demo_data() -> Self {
        Self {
            entries: demo_notifications(),
        }
    }

    /// Prepend an entry; the log stays newest-first.
    pub fn push(&mut self, notification: Notification) {
        self.entries.insert(0, notification);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.is_read).count()
    }

    pub fn all(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn demo_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            title: "SYSTEM ALERT".into(),
            message: "CNC-Alpha 3 vibration variance exceeds threshold (85%).".into(),
            time: "2m ago".into(),
            kind: NotificationKind::Error,
            is_read: false,
        },
        Notification {
            id: "2".into(),
            title: "SCHEDULE UPDATE".into(),
            message: "Technician Priya P. has started maintenance on GG-001.".into(),
            time: "45m ago".into(),
            kind: NotificationKind::Info,
            is_read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TicketStore;
    use crate::ticket::Priority;

    #[test]
    fn push_prepends_newest_first() {
        let mut log = NotificationLog::with_demo_data();
        let mut store = TicketStore::new();
        let ticket = store.create("Lathe L1", Priority::Medium);

        log.push(Notification::ticket_created(&ticket));
        assert_eq!(log.len(), 3);
        assert_eq!(log.all()[0].title, "TICKET CREATED");
        assert!(log.all()[0].message.contains(&ticket.id));
        assert!(log.all()[0].message.contains("Lathe L1"));
    }

    #[test]
    fn unread_count_ignores_read_entries() {
        let log = NotificationLog::with_demo_data();
        assert_eq!(log.len(), 2);
        assert_eq!(log.unread_count(), 1);
    }

    #[test]
    fn clear_all_empties_the_log() {
        let mut log = NotificationLog::with_demo_data();
        log.push(Notification::anomaly_detected("Spindle Unit X1"));
        log.clear_all();
        assert!(log.is_empty());
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn anomaly_notification_is_an_unread_error() {
        let n = Notification::anomaly_detected("Anomalous Spindle Unit X1");
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(!n.is_read);
        assert_eq!(
            n.message,
            "Neural scan identified critical failure risk in Anomalous Spindle Unit X1."
        );
    }

    #[test]
    fn notification_wire_shape() {
        let n = demo_notifications().remove(0);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["isRead"], false);
    }
}
