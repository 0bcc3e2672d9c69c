use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CandidateFilters, MatchAck, MatchAction, Profile};

/// Errors raised by profile and action stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Read access to profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch one profile, `None` when it does not exist
    async fn get(&self, id: &str) -> Result<Option<Profile>, StoreError>;

    /// Fetch up to `limit` profiles satisfying `filters`
    async fn query(&self, filters: &CandidateFilters, limit: usize) -> Result<Vec<Profile>, StoreError>;
}

/// Write access to the actions users take on surfaced matches
///
/// The matching core never records actions itself; the surrounding
/// application does once a user reacts to a result.
#[async_trait]
pub trait MatchActionStore: Send + Sync {
    async fn record(
        &self,
        from_id: &str,
        to_id: &str,
        action: MatchAction,
        message: Option<&str>,
    ) -> Result<MatchAck, StoreError>;
}
