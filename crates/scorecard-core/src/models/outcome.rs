//! Values derived by the scoring engine. Never stored, always recomputed
//! from observations and definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entity::EntityRef;

/// Classification of a metric value against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusTier {
    Good,
    Warning,
    Poor,
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTier::Good => write!(f, "Good"),
            StatusTier::Warning => write!(f, "Warning"),
            StatusTier::Poor => write!(f, "Poor"),
        }
    }
}

/// Direction of change between the two most recent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Flat => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VarianceResult {
    /// Distance from target, positive when favorable. Full precision.
    pub delta: f64,
    pub narrative: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RankDirection {
    /// Highest score ranks first.
    #[default]
    Descending,
    Ascending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedEntity {
    pub entity_id: String,
    /// 1-based position. Ties keep input order and still get distinct ranks.
    pub rank: u32,
    pub score: f64,
}

impl EntityRef for RankedEntity {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }
}
