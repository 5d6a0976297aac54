use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightedComponent {
    pub value: f64,
    pub weight: f64,
}

impl WeightedComponent {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Weighted average of component values.
///
/// Fails with [`ScoringError::NoComponents`] when there is nothing to
/// average: an empty slice, or weights that sum to zero.
pub fn composite_score(components: &[WeightedComponent]) -> Result<f64, ScoringError> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for c in components {
        ScoringError::check_finite("composite component", c.value)?;
        if !c.weight.is_finite() || c.weight < 0.0 {
            return Err(ScoringError::InvalidWeight(c.weight));
        }
        weighted_sum += c.value * c.weight;
        total_weight += c.weight;
    }

    if total_weight == 0.0 {
        return Err(ScoringError::NoComponents);
    }

    Ok(weighted_sum / total_weight)
}
