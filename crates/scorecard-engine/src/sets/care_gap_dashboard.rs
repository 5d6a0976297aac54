use scorecard_core::models::definition::{MetricCategory, MetricDefinition, Unit};

use crate::MetricSet;

pub const COMPLIANCE_RATE: &str = "Compliance_Rate";
pub const CLOSURE_RATE: &str = "Closure_Rate";
pub const AVG_DAYS_OPEN: &str = "Avg_Days_Open";

/// HEDIS Care Gap Closure Dashboard.
///
/// Unweighted: these metrics classify sites, providers, payers, and measures
/// but never feed a composite.
pub struct CareGapDashboard;

impl MetricSet for CareGapDashboard {
    fn id(&self) -> &str {
        "care_gap_dashboard"
    }

    fn name(&self) -> &str {
        "HEDIS Care Gap Closure Dashboard"
    }

    fn definitions(&self) -> &[MetricDefinition] {
        static DEFINITIONS: std::sync::LazyLock<Vec<MetricDefinition>> =
            std::sync::LazyLock::new(|| {
                vec![
                    MetricDefinition {
                        metric_name: COMPLIANCE_RATE.to_string(),
                        description: "HEDIS Compliance Rate".to_string(),
                        category: MetricCategory::Quality,
                        unit: Unit::Percent,
                        target_value: 85.0,
                        good_threshold: 85.0,
                        warning_threshold: 83.0,
                        lower_is_better: false,
                        weight: 0.0,
                    },
                    MetricDefinition {
                        metric_name: CLOSURE_RATE.to_string(),
                        description: "Care Gap Closure Rate".to_string(),
                        category: MetricCategory::Operations,
                        unit: Unit::Percent,
                        target_value: 70.0,
                        good_threshold: 70.0,
                        warning_threshold: 65.0,
                        lower_is_better: false,
                        weight: 0.0,
                    },
                    MetricDefinition {
                        metric_name: AVG_DAYS_OPEN.to_string(),
                        description: "Average Days Gaps Stay Open".to_string(),
                        category: MetricCategory::Operations,
                        unit: Unit::Days,
                        target_value: 30.0,
                        good_threshold: 30.0,
                        warning_threshold: 45.0,
                        lower_is_better: true,
                        weight: 0.0,
                    },
                ]
            });
        &DEFINITIONS
    }
}
