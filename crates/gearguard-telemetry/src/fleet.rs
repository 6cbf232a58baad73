//! Asset fleet and team roster.

use serde::{Deserialize, Serialize};

use crate::health::HealthSnapshot;

/// An asset record on the inventory page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub status: AssetStatus,
    /// Reliability index, 0-100.
    pub health: u8,
    pub next_service: String,
    pub load: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetStatus {
    Operational,
    Maintenance,
    Standby,
}

/// A technician on the squad-matrix page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub status: String,
    /// Active load, 0-100.
    pub workload: u8,
}

/// Fixed fleet the dashboard reports on.
#[derive(Clone, Debug)]
pub struct EquipmentRegistry {
    assets: Vec<Asset>,
    snapshots: Vec<HealthSnapshot>,
    team: Vec<TeamMember>,
}

impl EquipmentRegistry {
    pub fn new() -> Self {
        Self {
            assets: demo_assets(),
            snapshots: demo_snapshots(),
            team: demo_team(),
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn health_snapshots(&self) -> &[HealthSnapshot] {
        &self.snapshots
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// Mean asset reliability, rounded to the nearest whole percent.
    pub fn fleet_health_index(&self) -> u8 {
        if self.assets.is_empty() {
            return 0;
        }
        let sum: u32 = self.assets.iter().map(|a| a.health as u32).sum();
        ((sum as f64 / self.assets.len() as f64).round()) as u8
    }
}

impl Default for EquipmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "EQ-101".into(),
            name: "CNC-Alpha 3".into(),
            status: AssetStatus::Operational,
            health: 85,
            next_service: "24 Oct".into(),
            load: "72%".into(),
        },
        Asset {
            id: "EQ-102".into(),
            name: "Press-P4".into(),
            status: AssetStatus::Maintenance,
            health: 42,
            next_service: "Today".into(),
            load: "0%".into(),
        },
        Asset {
            id: "EQ-103".into(),
            name: "Compressor-C2".into(),
            status: AssetStatus::Operational,
            health: 91,
            next_service: "12 Nov".into(),
            load: "45%".into(),
        },
        Asset {
            id: "EQ-104".into(),
            name: "Robot-Arm-X".into(),
            status: AssetStatus::Standby,
            health: 98,
            next_service: "01 Dec".into(),
            load: "12%".into(),
        },
    ]
}

fn demo_snapshots() -> Vec<HealthSnapshot> {
    vec![
        HealthSnapshot::new("CNC-3", 15, "Failure in 72h", vec![10, 15, 12, 18, 14, 15]),
        HealthSnapshot::new("PRESS-1", 88, "Stable", vec![80, 82, 85, 88, 87, 88]),
        HealthSnapshot::new("AIR-C", 72, "Service in 12d", vec![75, 73, 70, 72, 71, 72]),
        HealthSnapshot::new("ROBOT-A", 95, "Optimal", vec![90, 92, 94, 95, 95, 95]),
        HealthSnapshot::new("BELT-4", 54, "Check sensors", vec![65, 60, 58, 55, 54, 54]),
    ]
}

fn demo_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Priya Patel".into(),
            role: "Senior Tech".into(),
            status: "On Duty".into(),
            workload: 82,
        },
        TeamMember {
            name: "Vikram Singh".into(),
            role: "Mechanical".into(),
            status: "Break".into(),
            workload: 45,
        },
        TeamMember {
            name: "Amit Kumar".into(),
            role: "Electrical".into(),
            status: "On Duty".into(),
            workload: 60,
        },
        TeamMember {
            name: "Ananya Iyer".into(),
            role: "AI Integration".into(),
            status: "Off Duty".into(),
            workload: 0,
        },
    ]
}
