use scorecard_core::models::definition::MetricDefinition;
use scorecard_core::models::outcome::VarianceResult;

use crate::error::ScoringError;

/// Distance of a value from its target, with a display narrative.
///
/// `delta` is positive when the value is on the favorable side of target.
/// Higher-is-better metrics narrate the signed delta ("-2.0% vs target");
/// lower-is-better metrics narrate the magnitude with a qualifier
/// ("2.0 days better"). Only the narrative is rounded.
pub fn compute_variance(
    value: f64,
    definition: &MetricDefinition,
) -> Result<VarianceResult, ScoringError> {
    for v in [value, definition.target_value] {
        ScoringError::check_finite(&definition.metric_name, v)?;
    }

    let suffix = definition.unit.delta_suffix();

    if definition.lower_is_better {
        let delta = definition.target_value - value;
        let shown = round_one_decimal(delta);
        let qualifier = if shown >= 0.0 { "better" } else { "worse" };
        Ok(VarianceResult {
            delta,
            narrative: format!("{:.1}{suffix} {qualifier}", shown.abs()),
        })
    } else {
        let delta = value - definition.target_value;
        let shown = round_one_decimal(delta);
        Ok(VarianceResult {
            delta,
            narrative: format!("{shown:+.1}{suffix} vs target"),
        })
    }
}

/// Round to one decimal place, folding `-0.0` into `0.0`.
pub fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
