//! Closure performance grouped by site, provider, payer, or measure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use scorecard_core::models::care_gap::CareGap;
use scorecard_core::models::definition::MetricDefinition;
use scorecard_core::models::outcome::{RankDirection, StatusTier};
use scorecard_engine::rank::{ordinal_suffix, rank_order};
use scorecard_engine::status::classify_status;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    Site,
    Provider,
    Payer,
    Measure,
}

impl Dimension {
    pub fn key<'a>(&self, gap: &'a CareGap) -> &'a str {
        match self {
            Dimension::Site => &gap.site_location,
            Dimension::Provider => &gap.provider_name,
            Dimension::Payer => &gap.payer_type,
            Dimension::Measure => &gap.measure_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionPerformance {
    pub rank: u32,
    pub rank_label: String,
    pub key: String,
    pub total_gaps: usize,
    pub open_gaps: usize,
    pub closed_gaps: usize,
    pub closure_rate: f64,
    pub avg_days_open: f64,
    pub status: StatusTier,
}

struct Group<'a> {
    key: &'a str,
    total: usize,
    closed: usize,
    days_open: u64,
}

impl Group<'_> {
    fn closure_rate(&self) -> f64 {
        self.closed as f64 / self.total as f64 * 100.0
    }
}

/// Group gaps by `dimension` and rank the groups by closure rate, highest
/// first. Each group's closure rate is classified against `definition`.
/// Groups with equal rates keep first-seen order.
pub fn rollup_by(
    gaps: &[&CareGap],
    dimension: Dimension,
    definition: &MetricDefinition,
    as_of: jiff::civil::Date,
) -> Result<Vec<DimensionPerformance>, ReportError> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for gap in gaps {
        let key = dimension.key(gap);
        let i = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                total: 0,
                closed: 0,
                days_open: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[i];
        group.total += 1;
        if gap.is_closed() {
            group.closed += 1;
        }
        group.days_open += u64::from(gap.days_open(as_of));
    }

    let ranked = rank_order(&groups, |g| g.closure_rate(), RankDirection::Descending);

    let mut rows = Vec::with_capacity(ranked.len());
    for (rank, group, closure_rate) in ranked {
        rows.push(DimensionPerformance {
            rank,
            rank_label: ordinal_suffix(rank),
            key: group.key.to_string(),
            total_gaps: group.total,
            open_gaps: group.total - group.closed,
            closed_gaps: group.closed,
            closure_rate,
            avg_days_open: group.days_open as f64 / group.total as f64,
            status: classify_status(closure_rate, definition)?,
        });
    }

    tracing::debug!(?dimension, groups = rows.len(), "care gaps rolled up");
    Ok(rows)
}
