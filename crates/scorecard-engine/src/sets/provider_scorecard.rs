use scorecard_core::models::definition::{MetricCategory, MetricDefinition, Unit};

use crate::MetricSet;

pub const HEDIS_COMPLIANCE_RATE: &str = "HEDIS_Compliance_Rate";
pub const DOCUMENTATION_QUALITY: &str = "Documentation_Quality";
pub const PATIENT_SATISFACTION: &str = "Patient_Satisfaction";
pub const GAP_CLOSURE_RATE: &str = "Gap_Closure_Rate";
pub const AVG_DAYS_TO_CLOSE: &str = "Avg_Days_To_Close";
pub const APPOINTMENT_ADHERENCE: &str = "Appointment_Adherence";
pub const COLLECTION_RATE: &str = "Collection_Rate";
pub const PRODUCTIVITY_SCORE: &str = "Productivity_Score";
pub const OVERALL_SCORE: &str = "Overall_Score";

/// Provider Performance Scorecard.
///
/// Eight weighted metrics: Quality 55%, Operations 35%, Financial 5%,
/// Productivity 5%. `Overall_Score` is reported alongside with zero weight;
/// it is the pre-computed summary, not a composite input.
pub struct ProviderScorecard;

impl MetricSet for ProviderScorecard {
    fn id(&self) -> &str {
        "provider_scorecard"
    }

    fn name(&self) -> &str {
        "Provider Performance Scorecard"
    }

    fn definitions(&self) -> &[MetricDefinition] {
        static DEFINITIONS: std::sync::LazyLock<Vec<MetricDefinition>> =
            std::sync::LazyLock::new(|| {
                // (name, description, category, unit, target, good, warning, lower_is_better, weight)
                let metrics = [
                    (
                        HEDIS_COMPLIANCE_RATE,
                        "HEDIS Compliance Rate",
                        MetricCategory::Quality,
                        Unit::Percent,
                        85.0,
                        87.0,
                        83.0,
                        false,
                        25.0,
                    ),
                    (
                        DOCUMENTATION_QUALITY,
                        "Documentation Quality Score",
                        MetricCategory::Quality,
                        Unit::Percent,
                        90.0,
                        92.0,
                        85.0,
                        false,
                        15.0,
                    ),
                    (
                        PATIENT_SATISFACTION,
                        "Patient Satisfaction Rating",
                        MetricCategory::Quality,
                        Unit::Rating,
                        4.5,
                        4.6,
                        4.3,
                        false,
                        15.0,
                    ),
                    (
                        GAP_CLOSURE_RATE,
                        "Care Gap Closure Rate",
                        MetricCategory::Operations,
                        Unit::Percent,
                        70.0,
                        73.0,
                        67.0,
                        false,
                        20.0,
                    ),
                    (
                        AVG_DAYS_TO_CLOSE,
                        "Average Days to Close a Gap",
                        MetricCategory::Operations,
                        Unit::Days,
                        14.0,
                        12.0,
                        18.0,
                        true,
                        10.0,
                    ),
                    (
                        APPOINTMENT_ADHERENCE,
                        "Appointment Adherence Rate",
                        MetricCategory::Operations,
                        Unit::Percent,
                        90.0,
                        92.0,
                        85.0,
                        false,
                        5.0,
                    ),
                    (
                        COLLECTION_RATE,
                        "Claims Collection Rate",
                        MetricCategory::Financial,
                        Unit::Percent,
                        95.0,
                        96.0,
                        92.0,
                        false,
                        5.0,
                    ),
                    (
                        PRODUCTIVITY_SCORE,
                        "Productivity Score",
                        MetricCategory::Productivity,
                        Unit::Points,
                        85.0,
                        88.0,
                        80.0,
                        false,
                        5.0,
                    ),
                    (
                        OVERALL_SCORE,
                        "Overall Performance Score",
                        MetricCategory::Quality,
                        Unit::Points,
                        85.0,
                        85.0,
                        75.0,
                        false,
                        0.0,
                    ),
                ];

                metrics
                    .into_iter()
                    .map(
                        |(name, description, category, unit, target, good, warning, lower, weight)| {
                            MetricDefinition {
                                metric_name: name.to_string(),
                                description: description.to_string(),
                                category,
                                unit,
                                target_value: target,
                                good_threshold: good,
                                warning_threshold: warning,
                                lower_is_better: lower,
                                weight,
                            }
                        },
                    )
                    .collect()
            });
        &DEFINITIONS
    }
}
