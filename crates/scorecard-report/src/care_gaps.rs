//! HEDIS Care Gap Closure Dashboard figures.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use scorecard_core::models::care_gap::{CareGap, GapStatus};
use scorecard_core::models::definition::MetricDefinition;
use scorecard_core::models::observation::MetricObservation;
use scorecard_core::models::outcome::{StatusTier, TrendDirection, VarianceResult};
use scorecard_core::models::period::Period;
use scorecard_engine::status::classify_status;
use scorecard_engine::trend::compute_trend;
use scorecard_engine::variance::compute_variance;

use crate::error::ReportError;

/// Restricts care gaps by site, payer, and measure category.
///
/// `None` leaves a dimension unrestricted. `Some` keeps only gaps whose value
/// is in the set, so an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapFilter {
    pub sites: Option<BTreeSet<String>>,
    pub payers: Option<BTreeSet<String>>,
    pub measure_categories: Option<BTreeSet<String>>,
}

fn allows(selection: &Option<BTreeSet<String>>, value: &str) -> bool {
    selection.as_ref().is_none_or(|set| set.contains(value))
}

impl GapFilter {
    pub fn with_sites<I, S>(mut self, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites = Some(sites.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_payers<I, S>(mut self, payers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payers = Some(payers.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_measure_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.measure_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, gap: &CareGap) -> bool {
        allows(&self.sites, &gap.site_location)
            && allows(&self.payers, &gap.payer_type)
            && allows(&self.measure_categories, &gap.measure_category)
    }

    pub fn apply<'a>(&self, gaps: &'a [CareGap]) -> Vec<&'a CareGap> {
        gaps.iter().filter(|g| self.matches(g)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GapSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Closed share of all gaps, 0–100. Zero when there are no gaps.
    pub closure_rate: f64,
    pub open_minus_closed: i64,
}

pub fn summarize_gaps(gaps: &[&CareGap]) -> GapSummary {
    let total = gaps.len();
    let closed = gaps.iter().filter(|g| g.is_closed()).count();
    let open = total - closed;

    GapSummary {
        total,
        open,
        closed,
        closure_rate: percent(closed, total),
        open_minus_closed: open as i64 - closed as i64,
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusShare {
    pub status: GapStatus,
    pub count: usize,
    pub share_pct: f64,
}

/// Gap counts per status, largest first. Statuses with no gaps are omitted.
pub fn status_distribution(gaps: &[&CareGap]) -> Vec<StatusShare> {
    let total = gaps.len();
    let mut shares: Vec<StatusShare> = [GapStatus::Open, GapStatus::Closed]
        .into_iter()
        .map(|status| {
            let count = gaps.iter().filter(|g| g.status == status).count();
            StatusShare {
                status,
                count,
                share_pct: percent(count, total),
            }
        })
        .filter(|s| s.count > 0)
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentGap {
    pub gap_id: String,
    pub measure_name: String,
    pub status: GapStatus,
    pub site_location: String,
    pub provider_name: String,
    #[ts(type = "string")]
    pub open_date: jiff::civil::Date,
    pub days_open: u32,
}

/// The `limit` most recently opened gaps, newest first. Gaps opened on the
/// same day keep their input order.
pub fn recent_gaps(gaps: &[&CareGap], limit: usize, as_of: jiff::civil::Date) -> Vec<RecentGap> {
    let mut sorted = gaps.to_vec();
    sorted.sort_by(|a, b| b.open_date.cmp(&a.open_date));

    sorted
        .into_iter()
        .take(limit)
        .map(|g| RecentGap {
            gap_id: g.gap_id.clone(),
            measure_name: g.measure_name.clone(),
            status: g.status,
            site_location: g.site_location.clone(),
            provider_name: g.provider_name.clone(),
            open_date: g.open_date,
            days_open: g.days_open(as_of),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trajectory {
    Above,
    Below,
}

/// Organization-wide compliance headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceSnapshot {
    #[ts(type = "string")]
    pub period: Period,
    pub current: f64,
    pub status: StatusTier,
    pub variance: VarianceResult,
    /// Change from the previous period, in rate points. `None` without one.
    pub monthly_change: Option<f64>,
    pub trajectory: Option<Trajectory>,
    pub trend: TrendDirection,
}

/// Summarize a monthly compliance series against its definition.
pub fn compliance_snapshot(
    series: &[MetricObservation],
    definition: &MetricDefinition,
) -> Result<ComplianceSnapshot, ReportError> {
    let mut ordered: Vec<&MetricObservation> = series.iter().collect();
    ordered.sort_by_key(|o| o.period);

    let (current, earlier) = ordered.split_last().ok_or(ReportError::EmptyDataset)?;
    let monthly_change = earlier.last().map(|previous| current.value - previous.value);
    let trajectory = monthly_change.map(|change| {
        if change > 0.0 {
            Trajectory::Above
        } else {
            Trajectory::Below
        }
    });

    Ok(ComplianceSnapshot {
        period: current.period,
        current: current.value,
        status: classify_status(current.value, definition)?,
        variance: compute_variance(current.value, definition)?,
        monthly_change,
        trajectory,
        trend: compute_trend(series),
    })
}
