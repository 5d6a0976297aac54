use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    #[error("invalid definition for '{metric}': {reason}")]
    InvalidDefinition { metric: String, reason: String },

    #[error("duplicate entity id '{0}'")]
    DuplicateEntity(String),

    #[error("duplicate observation for '{entity_id}' / '{metric_name}' in {period}")]
    DuplicateObservation {
        entity_id: String,
        metric_name: String,
        period: String,
    },
}
