//! Provider Performance Scorecard tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use scorecard_core::models::dataset::ScorecardDataset;
use scorecard_core::models::definition::MetricCategory;
use scorecard_core::models::entity::{Entity, EntityKind};
use scorecard_core::models::outcome::{RankDirection, StatusTier, TrendDirection, VarianceResult};
use scorecard_engine::MetricSet;
use scorecard_engine::composite::{WeightedComponent, composite_score};
use scorecard_engine::error::ScoringError;
use scorecard_engine::rank::{ordinal_suffix, rank_order};
use scorecard_engine::status::classify_status;
use scorecard_engine::trend::compute_trend;
use scorecard_engine::variance::compute_variance;

use crate::config::ReportConfig;
use crate::error::ReportError;

/// Where a provider's overall score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreSource {
    /// The latest observation of the ranking metric.
    Observed,
    /// Weighted composite of the provider's percent-scale metrics.
    Composite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricTrend {
    pub metric_name: String,
    pub value: Option<f64>,
    pub trend: TrendDirection,
}

/// One row of the all-providers scorecard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorecardRow {
    pub rank: u32,
    pub rank_label: String,
    pub entity_id: String,
    pub display_name: String,
    pub attributes: BTreeMap<String, String>,
    pub overall_score: f64,
    pub score_source: ScoreSource,
    /// Tier of the configured status metric; `None` when it was never observed.
    pub status: Option<StatusTier>,
    pub trends: Vec<MetricTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricBreakdown {
    pub category: MetricCategory,
    pub metric_name: String,
    pub description: String,
    pub current: f64,
    pub current_display: String,
    pub target: f64,
    pub target_display: String,
    pub variance: VarianceResult,
    pub status: StatusTier,
    pub trend: TrendDirection,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallScore {
    pub score: f64,
    pub source: ScoreSource,
    pub status: StatusTier,
    pub variance: VarianceResult,
}

/// The single-provider detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProviderDetail {
    pub entity_id: String,
    pub display_name: String,
    pub attributes: BTreeMap<String, String>,
    /// e.g. "2nd of 5". `None` when the provider has no score to rank by.
    pub rank_label: Option<String>,
    pub overall: Option<OverallScore>,
    pub metrics: Vec<MetricBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecutiveSummary {
    pub provider_count: usize,
    pub average_overall: f64,
    pub top_performer: String,
    pub top_score: f64,
    pub above_target: usize,
    /// Share of providers at or above target, 0–100.
    pub above_target_pct: f64,
}

struct ScoredProvider<'a> {
    entity: &'a Entity,
    score: f64,
    source: ScoreSource,
}

/// Overall score for one provider: the observed ranking metric if present,
/// otherwise the composite of its weighted percent-scale metrics.
fn overall_score(
    dataset: &ScorecardDataset,
    set: &dyn MetricSet,
    config: &ReportConfig,
    entity_id: &str,
) -> Result<Option<(f64, ScoreSource)>, ReportError> {
    if let Some(obs) = dataset.latest(entity_id, &config.ranking_metric) {
        let score = ScoringError::check_finite(&obs.metric_name, obs.value)?;
        return Ok(Some((score, ScoreSource::Observed)));
    }

    let components: Vec<WeightedComponent> = set
        .definitions()
        .iter()
        .filter(|d| d.weight > 0.0)
        .filter_map(|d| {
            let obs = dataset.latest(entity_id, &d.metric_name)?;
            let value = d.unit.percent_scale(obs.value)?;
            Some(WeightedComponent::new(value, d.weight))
        })
        .collect();

    match composite_score(&components) {
        Ok(score) => {
            tracing::debug!(
                entity_id,
                components = components.len(),
                "ranking metric missing; using composite score"
            );
            Ok(Some((score, ScoreSource::Composite)))
        }
        Err(ScoringError::NoComponents) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Build the all-providers scorecard, ordered by rank.
///
/// Providers with neither a ranking observation nor any weighted metric are
/// left out. A non-finite ranking observation fails the whole table.
pub fn build_scorecard(
    dataset: &ScorecardDataset,
    set: &dyn MetricSet,
    config: &ReportConfig,
) -> Result<Vec<ScorecardRow>, ReportError> {
    dataset.validate()?;

    let status_def = set
        .definition(&config.status_metric)
        .ok_or_else(|| ReportError::UnknownMetric(config.status_metric.clone()))?;

    let mut scored = Vec::new();
    for entity in dataset
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Provider)
    {
        match overall_score(dataset, set, config, &entity.entity_id)? {
            Some((score, source)) => scored.push(ScoredProvider {
                entity,
                score,
                source,
            }),
            None => tracing::warn!(
                entity_id = %entity.entity_id,
                "provider has no ranking score; omitted from scorecard"
            ),
        }
    }

    let ranked = rank_order(&scored, |s| s.score, RankDirection::Descending);

    let mut rows = Vec::with_capacity(ranked.len());
    for (rank, provider, _) in ranked {
        let entity = provider.entity;

        let status = dataset
            .latest(&entity.entity_id, &status_def.metric_name)
            .map(|obs| classify_status(obs.value, status_def))
            .transpose()?;

        let trends = config
            .trend_metrics
            .iter()
            .map(|metric| MetricTrend {
                metric_name: metric.clone(),
                value: dataset.latest(&entity.entity_id, metric).map(|o| o.value),
                trend: compute_trend(dataset.series(&entity.entity_id, metric)),
            })
            .collect();

        rows.push(ScorecardRow {
            rank,
            rank_label: ordinal_suffix(rank),
            entity_id: entity.entity_id.clone(),
            display_name: entity.display_name.clone(),
            attributes: entity.attributes.clone(),
            overall_score: provider.score,
            score_source: provider.source,
            status,
            trends,
        });
    }

    Ok(rows)
}

/// Build the detail view for one provider.
pub fn build_provider_detail(
    dataset: &ScorecardDataset,
    set: &dyn MetricSet,
    config: &ReportConfig,
    entity_id: &str,
) -> Result<ProviderDetail, ReportError> {
    let entity = dataset
        .entity(entity_id)
        .ok_or_else(|| ReportError::UnknownEntity(entity_id.to_string()))?;

    let rows = build_scorecard(dataset, set, config)?;
    let row = rows.iter().find(|r| r.entity_id == entity_id);
    let rank_label = row.map(|r| format!("{} of {}", r.rank_label, rows.len()));

    let overall = match row {
        Some(row) => {
            let mut target_def = set
                .definition(&config.ranking_metric)
                .ok_or_else(|| ReportError::UnknownMetric(config.ranking_metric.clone()))?
                .clone();
            target_def.target_value = config.overall_target;
            Some(OverallScore {
                score: row.overall_score,
                source: row.score_source,
                status: classify_status(row.overall_score, &target_def)?,
                variance: compute_variance(row.overall_score, &target_def)?,
            })
        }
        None => None,
    };

    let mut metrics = Vec::new();
    for def in set
        .definitions()
        .iter()
        .filter(|d| d.metric_name != config.ranking_metric)
    {
        let Some(obs) = dataset.latest(entity_id, &def.metric_name) else {
            tracing::debug!(entity_id, metric = %def.metric_name, "no observation; metric skipped");
            continue;
        };

        metrics.push(MetricBreakdown {
            category: def.category,
            metric_name: def.metric_name.clone(),
            description: def.description.clone(),
            current: obs.value,
            current_display: def.unit.format_value(obs.value),
            target: def.target_value,
            target_display: def.unit.format_value(def.target_value),
            variance: compute_variance(obs.value, def)?,
            status: classify_status(obs.value, def)?,
            trend: compute_trend(dataset.series(entity_id, &def.metric_name)),
            weight: def.weight,
        });
    }

    Ok(ProviderDetail {
        entity_id: entity.entity_id.clone(),
        display_name: entity.display_name.clone(),
        attributes: entity.attributes.clone(),
        rank_label,
        overall,
        metrics,
    })
}

/// Headline numbers across all ranked providers.
pub fn executive_summary(
    rows: &[ScorecardRow],
    config: &ReportConfig,
) -> Result<ExecutiveSummary, ReportError> {
    let top = rows
        .iter()
        .min_by_key(|r| r.rank)
        .ok_or(ReportError::EmptyDataset)?;

    let count = rows.len();
    let average = rows.iter().map(|r| r.overall_score).sum::<f64>() / count as f64;
    let above_target = rows
        .iter()
        .filter(|r| r.overall_score >= config.overall_target)
        .count();

    Ok(ExecutiveSummary {
        provider_count: count,
        average_overall: average,
        top_performer: top.display_name.clone(),
        top_score: top.overall_score,
        above_target,
        above_target_pct: above_target as f64 / count as f64 * 100.0,
    })
}

/// Mean of each provider's latest value of a metric. `None` when no provider
/// has observed it.
pub fn average_latest(dataset: &ScorecardDataset, metric_name: &str) -> Option<f64> {
    let values: Vec<f64> = dataset
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::Provider)
        .filter_map(|e| dataset.latest(&e.entity_id, metric_name))
        .map(|o| o.value)
        .collect();

    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
