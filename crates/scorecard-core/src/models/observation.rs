use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entity::EntityRef;
use super::period::Period;

/// One recorded value of a metric for an entity in a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricObservation {
    pub entity_id: String,
    pub metric_name: String,
    pub value: f64,
    #[ts(type = "string")]
    pub period: Period,
}

impl MetricObservation {
    pub fn new(
        entity_id: impl Into<String>,
        metric_name: impl Into<String>,
        value: f64,
        period: Period,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            metric_name: metric_name.into(),
            value,
            period,
        }
    }
}

impl EntityRef for MetricObservation {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }
}
