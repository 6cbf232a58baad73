//! GearGuard Telemetry
//!
//! Mock telemetry behind the dashboard panels: the asset fleet, predictive
//! health snapshots, the team roster, and the anomaly scan that raises
//! auto-detected tickets. There is no real ingestion; every reading is a
//! fixed constant the portal serves as-is.

pub mod fleet;
pub mod health;
pub mod scan;

pub use fleet::{Asset, AssetStatus, EquipmentRegistry, TeamMember};
pub use health::{HealthSnapshot, HealthStatus};
pub use scan::{AnomalyScanner, ScanFinding};
