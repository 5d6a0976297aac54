use std::path::Path;

use serde::{Deserialize, Serialize};

use scorecard_engine::MetricSet;
use scorecard_engine::sets::provider_scorecard::{
    GAP_CLOSURE_RATE, HEDIS_COMPLIANCE_RATE, OVERALL_SCORE,
};

use crate::error::ReportError;

/// Schema version written by [`save_config`]. Version 1 added
/// `trend_metrics` and `recent_gap_limit`; see [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const DEFAULT_RECENT_GAP_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Label shown in report headers, e.g. "Q4 2024 - January 2025".
    pub reporting_period: String,
    /// Metric providers are ranked by.
    pub ranking_metric: String,
    /// Metric whose status tier is shown on each scorecard row.
    pub status_metric: String,
    /// Metrics shown with a trend arrow on each scorecard row. Added in v1.
    pub trend_metrics: Vec<String>,
    /// Overall score at or above which a provider counts as on target.
    pub overall_target: f64,
    /// How many gaps the recent-gaps table lists. Added in v1.
    pub recent_gap_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            reporting_period: String::new(),
            ranking_metric: OVERALL_SCORE.to_string(),
            status_metric: HEDIS_COMPLIANCE_RATE.to_string(),
            trend_metrics: vec![
                HEDIS_COMPLIANCE_RATE.to_string(),
                GAP_CLOSURE_RATE.to_string(),
            ],
            overall_target: 85.0,
            recent_gap_limit: DEFAULT_RECENT_GAP_LIMIT,
        }
    }
}

impl ReportConfig {
    /// Check that every metric the config names exists in `set`.
    pub fn validate(&self, set: &dyn MetricSet) -> Result<(), ReportError> {
        if !self.overall_target.is_finite() {
            return Err(ReportError::Config(format!(
                "overall_target is not finite ({})",
                self.overall_target
            )));
        }

        let named = [&self.ranking_metric, &self.status_metric]
            .into_iter()
            .chain(&self.trend_metrics);
        for metric in named {
            if set.definition(metric).is_none() {
                return Err(ReportError::UnknownMetric(metric.clone()));
            }
        }
        Ok(())
    }
}

/// Parse a config from JSON, migrating older versions first.
pub fn parse_config(contents: &str) -> Result<ReportConfig, ReportError> {
    // Older report configs lack v1 fields, so upgrade the JSON before typing it.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ReportConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ReportConfig, ReportError> {
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

/// Upgrade a report config object from `from_version` to
/// [`CURRENT_VERSION`], filling fields added since then with their defaults.
/// Configs from a newer build are refused.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ReportError> {
    if from_version > CURRENT_VERSION {
        return Err(ReportError::Config(format!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        )));
    }

    // v0 → v1: add trend_metrics and recent_gap_limit with their defaults
    if from_version < 1 {
        let defaults = ReportConfig::default();
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ReportError::Config("config is not a JSON object".to_string()))?;
        obj.entry("trend_metrics")
            .or_insert(serde_json::to_value(&defaults.trend_metrics)?);
        obj.entry("recent_gap_limit")
            .or_insert(serde_json::Value::Number(defaults.recent_gap_limit.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added trend_metrics, recent_gap_limit)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ReportConfig) -> Result<(), ReportError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // A saved report config is always in the current shape.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Readers see either the previous report config or the new one, never a partial file.
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
