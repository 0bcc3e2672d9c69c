use chrono::Datelike;
use std::sync::Arc;

use crate::core::filters::build_candidate_filters;
use crate::error::MatchError;
use crate::models::{MatchingCriteria, Profile};
use crate::services::ProfileStore;

/// Upper bound on profiles fetched for one retrieval, to bound scoring cost
pub const CANDIDATE_POOL_SIZE: usize = 100;

/// Fetches the bounded candidate pool for a set of criteria
///
/// Performs exactly one store query per call and does no ranking.
#[derive(Clone)]
pub struct CandidateRetriever {
    store: Arc<dyn ProfileStore>,
}

impl CandidateRetriever {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Candidates for `criteria`, using the current UTC year for age bounds
    pub async fn find_candidates(&self, criteria: &MatchingCriteria) -> Result<Vec<Profile>, MatchError> {
        self.find_candidates_in_year(criteria, chrono::Utc::now().year()).await
    }

    pub async fn find_candidates_in_year(
        &self,
        criteria: &MatchingCriteria,
        current_year: i32,
    ) -> Result<Vec<Profile>, MatchError> {
        let filters = build_candidate_filters(criteria, current_year);
        let mut candidates = self.store.query(&filters, CANDIDATE_POOL_SIZE).await?;

        // Stores are trusted to apply the limit, but never exceed the pool
        candidates.truncate(CANDIDATE_POOL_SIZE);

        tracing::debug!(
            "Retrieved {} candidates for {}",
            candidates.len(),
            criteria.profile_id
        );

        Ok(candidates)
    }
}
