use scorecard_core::models::definition::MetricDefinition;
use scorecard_core::models::outcome::StatusTier;

use crate::error::ScoringError;

/// Classify a metric value into a status tier.
///
/// Threshold boundaries belong to the more favorable tier: a value exactly
/// on `good_threshold` is Good, exactly on `warning_threshold` is Warning.
pub fn classify_status(
    value: f64,
    definition: &MetricDefinition,
) -> Result<StatusTier, ScoringError> {
    ScoringError::check_finite(&definition.metric_name, value)?;

    let tier = if definition.lower_is_better {
        if value <= definition.good_threshold {
            StatusTier::Good
        } else if value <= definition.warning_threshold {
            StatusTier::Warning
        } else {
            StatusTier::Poor
        }
    } else if value >= definition.good_threshold {
        StatusTier::Good
    } else if value >= definition.warning_threshold {
        StatusTier::Warning
    } else {
        StatusTier::Poor
    };

    Ok(tier)
}
