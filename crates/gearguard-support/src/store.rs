//! Ticket Store
//!
//! The canonical ticket collection and its only mutation surface. Tickets
//! live newest-first; creation prepends, moves rewrite the status field in
//! place, and everything else is a read.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ticket::{KanbanStatus, Priority, Technician, TechnicianStatus, Ticket};
use crate::{Result, SupportError};

/// The canonical in-memory ticket collection.
#[derive(Clone, Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the demo board the portal boots with.
    pub fn with_demo_data() -> Self {
        Self {
            tickets: demo_tickets(),
        }
    }

    /// Create a ticket from the request form and prepend it to the board.
    ///
    /// The id keeps the original `GG-###` shape but is re-drawn until it is
    /// unused, so ids stay unique no matter how many tickets exist.
    pub fn create(&mut self, equipment_name: impl Into<String>, priority: Priority) -> Ticket {
        let ticket = Ticket {
            id: self.unused_id("GG", 3, 1000),
            equipment_name: equipment_name.into(),
            technician: Technician::default_assignee(),
            priority,
            status: KanbanStatus::New,
            is_overdue: false,
            created_at: "just now".into(),
        };
        info!(id = %ticket.id, equipment = %ticket.equipment_name, "ticket created");
        self.tickets.insert(0, ticket.clone());
        ticket
    }

    /// Create a critical ticket for an asset flagged by the anomaly scanner.
    pub fn create_from_scan(&mut self, equipment_name: impl Into<String>) -> Ticket {
        let ticket = Ticket {
            id: self.unused_id("GG-SCAN", 2, 100),
            equipment_name: equipment_name.into(),
            technician: Technician::ai_core(),
            priority: Priority::Critical,
            status: KanbanStatus::New,
            is_overdue: false,
            created_at: "Auto-detected".into(),
        };
        info!(id = %ticket.id, equipment = %ticket.equipment_name, "scan ticket created");
        self.tickets.insert(0, ticket.clone());
        ticket
    }

    /// Move a ticket to a new lane. Only `status` changes; every other
    /// field of every ticket is left untouched. Any lane may be the target,
    /// including the one the ticket is already in.
    pub fn move_ticket(&mut self, id: &str, new_status: KanbanStatus) -> Result<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SupportError::TicketNotFound(id.to_string()))?;
        debug!(id, from = ?ticket.status, to = ?new_status, "ticket moved");
        ticket.status = new_status;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets whose asset name or id contains the query, case-insensitive.
    /// An empty query returns the full collection; order is preserved.
    pub fn filter(&self, query: &str) -> Vec<Ticket> {
        if query.is_empty() {
            return self.tickets.clone();
        }
        let needle = query.to_lowercase();
        self.tickets
            .iter()
            .filter(|t| {
                t.equipment_name.to_lowercase().contains(&needle)
                    || t.id.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// The filtered board, grouped into the four lanes.
    pub fn board(&self, query: &str) -> BoardLanes {
        group_by_status(&self.filter(query))
    }

    /// Open tickets (New / In Progress) at Critical or High priority.
    pub fn open_high_priority_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| {
                t.is_open() && matches!(t.priority, Priority::Critical | Priority::High)
            })
            .count()
    }

    pub fn overdue_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_overdue).count()
    }

    /// Draw `{prefix}-{suffix}` ids until one is unused. If the padded
    /// random space is somehow exhausted, walk upward past it instead of
    /// spinning forever.
    fn unused_id(&self, prefix: &str, width: usize, bound: u32) -> String {
        let mut rng = rand::thread_rng();
        for _ in 0..bound as usize * 4 {
            let id = format!("{prefix}-{:0width$}", rng.gen_range(0..bound), width = width);
            if self.get(&id).is_none() {
                return id;
            }
        }
        let mut n = bound;
        loop {
            let id = format!("{prefix}-{n}");
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}

/// The four fixed lanes of the kanban board.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardLanes {
    #[serde(rename = "NEW")]
    pub new: Vec<Ticket>,
    #[serde(rename = "IN_PROGRESS")]
    pub in_progress: Vec<Ticket>,
    #[serde(rename = "REPAIRED")]
    pub repaired: Vec<Ticket>,
    #[serde(rename = "SCRAP")]
    pub scrap: Vec<Ticket>,
}

impl BoardLanes {
    pub fn lane(&self, status: KanbanStatus) -> &[Ticket] {
        match status {
            KanbanStatus::New => &self.new,
            KanbanStatus::InProgress => &self.in_progress,
            KanbanStatus::Repaired => &self.repaired,
            KanbanStatus::Scrap => &self.scrap,
        }
    }

    pub fn total(&self) -> usize {
        self.new.len() + self.in_progress.len() + self.repaired.len() + self.scrap.len()
    }
}

/// Partition tickets into the four lanes, preserving relative order within
/// each lane. Every ticket lands in exactly the lane matching its status.
pub fn group_by_status(tickets: &[Ticket]) -> BoardLanes {
    let mut lanes = BoardLanes::default();
    for t in tickets {
        let lane = match t.status {
            KanbanStatus::New => &mut lanes.new,
            KanbanStatus::InProgress => &mut lanes.in_progress,
            KanbanStatus::Repaired => &mut lanes.repaired,
            KanbanStatus::Scrap => &mut lanes.scrap,
        };
        lane.push(t.clone());
    }
    lanes
}

/// The board the demo portal boots with.
pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "GG-001".into(),
            equipment_name: "CNC Mill - Alpha 3".into(),
            technician: Technician::new("Priya P.", TechnicianStatus::Online),
            priority: Priority::Critical,
            status: KanbanStatus::New,
            is_overdue: true,
            created_at: "2h ago".into(),
        },
        Ticket {
            id: "GG-002".into(),
            equipment_name: "Hydraulic Press P4".into(),
            technician: Technician::new("Vikram S.", TechnicianStatus::Online),
            priority: Priority::High,
            status: KanbanStatus::InProgress,
            is_overdue: false,
            created_at: "5h ago".into(),
        },
        Ticket {
            id: "GG-003".into(),
            equipment_name: "Air Compressor C2".into(),
            technician: Technician::new("Priya P.", TechnicianStatus::Online),
            priority: Priority::Medium,
            status: KanbanStatus::New,
            is_overdue: false,
            created_at: "1d ago".into(),
        },
        Ticket {
            id: "GG-004".into(),
            equipment_name: "Assembly Line Belt 2".into(),
            technician: Technician::new("Amit K.", TechnicianStatus::Offline),
            priority: Priority::Low,
            status: KanbanStatus::Repaired,
            is_overdue: false,
            created_at: "3h ago".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_prepends_and_ids_stay_unique() {
        let mut store = TicketStore::new();
        let mut last_id = String::new();
        for i in 0..200 {
            let t = store.create(format!("Asset {i}"), Priority::Low);
            assert_eq!(t.status, KanbanStatus::New);
            assert!(!t.is_overdue);
            assert_eq!(t.created_at, "just now");
            assert_eq!(store.all()[0].id, t.id, "new ticket appears first");
            last_id = t.id;
        }
        assert_eq!(store.len(), 200);
        let ids: HashSet<_> = store.all().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 200, "every generated id present exactly once");
        assert!(store.get(&last_id).is_some());
    }

    #[test]
    fn ids_widen_once_the_random_space_is_exhausted() {
        let mut store = TicketStore::new();
        // Occupy the entire GG-SCAN-## space, then one more.
        for _ in 0..101 {
            store.create_from_scan("Spindle");
        }
        let ids: HashSet<_> = store.all().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 101);
    }

    #[test]
    fn move_rewrites_only_the_status_field() {
        let mut store = TicketStore::with_demo_data();
        let before = store.all().to_vec();
        for target in KanbanStatus::ALL {
            store.move_ticket("GG-003", target).unwrap();
            for (a, b) in store.all().iter().zip(&before) {
                if a.id == "GG-003" {
                    assert_eq!(a.status, target);
                    assert_eq!(a.equipment_name, b.equipment_name);
                    assert_eq!(a.priority, b.priority);
                    assert_eq!(a.technician, b.technician);
                    assert_eq!(a.is_overdue, b.is_overdue);
                    assert_eq!(a.created_at, b.created_at);
                } else {
                    assert_eq!(a, b, "other tickets untouched");
                }
            }
        }
    }

    #[test]
    fn any_status_may_move_to_any_other() {
        let mut store = TicketStore::with_demo_data();
        // Scrap back to New is a legal edge; the graph is complete.
        store.move_ticket("GG-004", KanbanStatus::Scrap).unwrap();
        store.move_ticket("GG-004", KanbanStatus::New).unwrap();
        assert_eq!(store.get("GG-004").unwrap().status, KanbanStatus::New);
    }

    #[test]
    fn move_on_unknown_id_errors_and_leaves_collection_unchanged() {
        let mut store = TicketStore::with_demo_data();
        let before = store.all().to_vec();
        let err = store
            .move_ticket("GG-999", KanbanStatus::Scrap)
            .unwrap_err();
        assert_eq!(err, SupportError::TicketNotFound("GG-999".into()));
        assert_eq!(store.all(), &before[..], "pointwise unchanged");
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let store = TicketStore::with_demo_data();
        let all = store.filter("");
        assert_eq!(all, store.all());
    }

    #[test]
    fn filter_matches_name_and_id_case_insensitively() {
        let store = TicketStore::with_demo_data();

        let by_name = store.filter("alpha");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "GG-001");

        let by_id = store.filter("gg-00");
        assert_eq!(by_id.len(), 4);

        // Nothing satisfying the predicate is omitted.
        let press = store.filter("PRESS");
        assert_eq!(press.len(), 1);
        assert_eq!(press[0].equipment_name, "Hydraulic Press P4");

        assert!(store.filter("turbine").is_empty());
    }

    #[test]
    fn group_by_status_partitions_without_loss() {
        let store = TicketStore::with_demo_data();
        let lanes = group_by_status(store.all());

        assert_eq!(lanes.total(), store.len());
        for status in KanbanStatus::ALL {
            for t in lanes.lane(status) {
                assert_eq!(t.status, status, "ticket sits in its own lane");
            }
        }
        // Relative order preserved within a lane: GG-001 precedes GG-003.
        assert_eq!(lanes.new[0].id, "GG-001");
        assert_eq!(lanes.new[1].id, "GG-003");
        // Empty lanes still exist.
        assert!(lanes.scrap.is_empty());
    }

    #[test]
    fn derived_aggregates_follow_mutations() {
        let mut store = TicketStore::with_demo_data();
        assert_eq!(store.open_high_priority_count(), 2); // GG-001, GG-002
        assert_eq!(store.overdue_count(), 1);

        store.move_ticket("GG-001", KanbanStatus::Repaired).unwrap();
        assert_eq!(store.open_high_priority_count(), 1);

        store.create("Turbine T9", Priority::Critical);
        assert_eq!(store.open_high_priority_count(), 2);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut store = TicketStore::new();

        let t = store.create("CNC-Alpha 4", Priority::Critical);
        assert_eq!(store.len(), 1);
        assert_eq!(t.status, KanbanStatus::New);
        assert_eq!(t.priority, Priority::Critical);

        store.move_ticket(&t.id, KanbanStatus::InProgress).unwrap();
        assert_eq!(store.get(&t.id).unwrap().status, KanbanStatus::InProgress);

        let hits = store.filter("alpha");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, t.id);

        store.move_ticket(&t.id, KanbanStatus::Scrap).unwrap();
        assert_eq!(store.get(&t.id).unwrap().status, KanbanStatus::Scrap);
    }
}
