use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid value for metric '{metric}': {value}")]
    InvalidMetricValue { metric: String, value: f64 },

    #[error("invalid component weight: {0}")]
    InvalidWeight(f64),

    #[error("composite score needs at least one component with non-zero weight")]
    NoComponents,
}

impl ScoringError {
    /// Pass a finite value through; NaN and infinities fail as
    /// [`ScoringError::InvalidMetricValue`] for `metric`.
    pub fn check_finite(metric: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidMetricValue {
                metric: metric.to_string(),
                value,
            })
        }
    }
}
