use thiserror::Error;

use scorecard_core::error::CoreError;
use scorecard_engine::error::ScoringError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("no data to report")]
    EmptyDataset,
}
