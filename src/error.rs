use thiserror::Error;

use crate::services::StoreError;

/// Errors surfaced by the matching engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Profile not found: {0}")]
    ProfileMissing(String),

    #[error("Invalid matching criteria: {0}")]
    InvalidCriteria(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Scoring task failed: {0}")]
    Scoring(#[from] tokio::task::JoinError),
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        MatchError::InvalidCriteria(errors.to_string())
    }
}
