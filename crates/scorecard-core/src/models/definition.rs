use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Scorecard section a metric is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MetricCategory {
    Quality,
    Operations,
    Financial,
    Productivity,
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricCategory::Quality => write!(f, "Quality"),
            MetricCategory::Operations => write!(f, "Operations"),
            MetricCategory::Financial => write!(f, "Financial"),
            MetricCategory::Productivity => write!(f, "Productivity"),
        }
    }
}

/// The scale a metric value is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Unit {
    /// Rate on a 0–100 scale.
    Percent,
    /// Elapsed days.
    Days,
    /// Survey rating on a 1–5 scale.
    Rating,
    /// Unitless score on a 0–100 scale.
    Points,
}

impl Unit {
    /// Suffix appended to a signed delta in variance narratives.
    pub fn delta_suffix(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Days => " days",
            Unit::Rating | Unit::Points => "",
        }
    }

    /// Format a value with its unit, one decimal place.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Unit::Percent => format!("{value:.1}%"),
            Unit::Days => format!("{value:.1} days"),
            Unit::Rating => format!("{value:.1}/5"),
            Unit::Points => format!("{value:.1}"),
        }
    }

    /// Map a value onto the 0–100 scale used for composites.
    ///
    /// Returns `None` for units with no meaningful percentage form.
    pub fn percent_scale(&self, value: f64) -> Option<f64> {
        match self {
            Unit::Percent | Unit::Points => Some(value),
            Unit::Rating => Some(value * 20.0),
            Unit::Days => None,
        }
    }
}

/// How a raw metric value maps to a status tier and a variance narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricDefinition {
    pub metric_name: String,
    pub description: String,
    pub category: MetricCategory,
    pub unit: Unit,
    pub target_value: f64,
    /// Boundary of the Good tier. Always on the favorable side of `warning_threshold`.
    pub good_threshold: f64,
    pub warning_threshold: f64,
    pub lower_is_better: bool,
    /// Share of the composite score, 0–100.
    pub weight: f64,
}

impl MetricDefinition {
    /// Check finiteness, weight range, and threshold ordering.
    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |reason: String| CoreError::InvalidDefinition {
            metric: self.metric_name.clone(),
            reason,
        };

        for (field, value) in [
            ("target_value", self.target_value),
            ("good_threshold", self.good_threshold),
            ("warning_threshold", self.warning_threshold),
            ("weight", self.weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{field} is not finite ({value})")));
            }
        }

        if !(0.0..=100.0).contains(&self.weight) {
            return Err(invalid(format!(
                "weight {} is outside [0, 100]",
                self.weight
            )));
        }

        if self.lower_is_better && self.good_threshold > self.warning_threshold {
            return Err(invalid(format!(
                "lower is better but good threshold {} exceeds warning threshold {}",
                self.good_threshold, self.warning_threshold
            )));
        }
        if !self.lower_is_better && self.good_threshold < self.warning_threshold {
            return Err(invalid(format!(
                "higher is better but good threshold {} is below warning threshold {}",
                self.good_threshold, self.warning_threshold
            )));
        }

        Ok(())
    }
}
