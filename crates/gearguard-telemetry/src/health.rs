//! Predictive health snapshots for the asset-intelligence chart.

use serde::{Deserialize, Serialize};

/// One bar on the predictive asset-intelligence chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub name: String,
    /// Reliability index, 0-100.
    pub health: u8,
    /// Human-readable prediction label ("Failure in 72h", "Stable", ...).
    pub prediction: String,
    pub status: HealthStatus,
    /// Last six readings, oldest first.
    pub history: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Critical,
    Warn,
    Good,
}

impl HealthStatus {
    /// Classification thresholds: under 40 is critical, under 75 warn.
    pub fn from_health(health: u8) -> Self {
        match health {
            0..=39 => HealthStatus::Critical,
            40..=74 => HealthStatus::Warn,
            _ => HealthStatus::Good,
        }
    }
}

impl HealthSnapshot {
    pub fn new(
        name: impl Into<String>,
        health: u8,
        prediction: impl Into<String>,
        history: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            prediction: prediction.into(),
            status: HealthStatus::from_health(health),
            history,
        }
    }
}
