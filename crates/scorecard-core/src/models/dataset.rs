use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::observation::MetricObservation;
use crate::error::CoreError;

/// An in-memory snapshot of entities and their metric observations,
/// assembled by the host at its ingestion boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardDataset {
    pub entities: Vec<Entity>,
    pub observations: Vec<MetricObservation>,
}

impl ScorecardDataset {
    pub fn new(entities: Vec<Entity>, observations: Vec<MetricObservation>) -> Self {
        Self {
            entities,
            observations,
        }
    }

    /// Parse a dataset from its JSON form and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let dataset: ScorecardDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reject datasets that repeat an entity id or hold more than one
    /// observation per (entity, metric, period).
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut ids = HashSet::with_capacity(self.entities.len());
        for entity in &self.entities {
            if !ids.insert(entity.entity_id.as_str()) {
                return Err(CoreError::DuplicateEntity(entity.entity_id.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(self.observations.len());
        for obs in &self.observations {
            if !seen.insert((obs.entity_id.as_str(), obs.metric_name.as_str(), obs.period)) {
                return Err(CoreError::DuplicateObservation {
                    entity_id: obs.entity_id.clone(),
                    metric_name: obs.metric_name.clone(),
                    period: obs.period.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn entity(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.entity_id == entity_id)
    }

    /// All observations of one metric for one entity, oldest period first.
    pub fn series(&self, entity_id: &str, metric_name: &str) -> Vec<&MetricObservation> {
        let mut series: Vec<_> = self
            .observations
            .iter()
            .filter(|o| o.entity_id == entity_id && o.metric_name == metric_name)
            .collect();
        series.sort_by_key(|o| o.period);
        series
    }

    /// The most recent observation of a metric for an entity.
    pub fn latest(&self, entity_id: &str, metric_name: &str) -> Option<&MetricObservation> {
        self.observations
            .iter()
            .filter(|o| o.entity_id == entity_id && o.metric_name == metric_name)
            .max_by_key(|o| o.period)
    }
}
