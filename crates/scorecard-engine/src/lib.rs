//! scorecard-engine
//!
//! Scoring rules for provider quality metrics. Pure functions with no I/O and
//! no logging: raw metric values in, status tiers, variance narratives,
//! trends, ranks, and composite scores out. Also holds the built-in metric
//! catalogs of each dashboard.

pub mod composite;
pub mod error;
pub mod rank;
pub mod sets;
pub mod status;
pub mod trend;
pub mod variance;

use scorecard_core::error::CoreError;
use scorecard_core::models::definition::MetricDefinition;

/// A named catalog of metric definitions backing one dashboard.
pub trait MetricSet: Send + Sync {
    /// Unique identifier (e.g., "provider_scorecard").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Provider Performance Scorecard").
    fn name(&self) -> &str;

    /// Every metric this set reports, in display order.
    fn definitions(&self) -> &[MetricDefinition];

    /// Look up a definition by metric name.
    fn definition(&self, metric_name: &str) -> Option<&MetricDefinition> {
        self.definitions()
            .iter()
            .find(|d| d.metric_name == metric_name)
    }

    /// Sum of all metric weights. 100 for a fully weighted catalog.
    fn total_weight(&self) -> f64 {
        self.definitions().iter().map(|d| d.weight).sum()
    }

    /// Validate every definition, collecting all failures.
    fn validate_definitions(&self) -> Vec<CoreError> {
        let mut errors: Vec<CoreError> = self
            .definitions()
            .iter()
            .filter_map(|d| d.validate().err())
            .collect();

        for (i, d) in self.definitions().iter().enumerate() {
            if self.definitions()[..i]
                .iter()
                .any(|earlier| earlier.metric_name == d.metric_name)
            {
                errors.push(CoreError::InvalidDefinition {
                    metric: d.metric_name.clone(),
                    reason: format!("defined more than once in '{}'", self.id()),
                });
            }
        }
        errors
    }
}

/// Return all registered metric sets.
pub fn all_metric_sets() -> Vec<Box<dyn MetricSet>> {
    vec![
        Box::new(sets::provider_scorecard::ProviderScorecard),
        Box::new(sets::care_gap_dashboard::CareGapDashboard),
    ]
}

/// Look up a metric set by ID.
pub fn get_metric_set(id: &str) -> Option<Box<dyn MetricSet>> {
    all_metric_sets().into_iter().find(|s| s.id() == id)
}
