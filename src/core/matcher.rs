use std::sync::Arc;
use validator::Validate;

use crate::core::{ranker::Ranker, retriever::CandidateRetriever, scoring::CompatibilityScorer};
use crate::error::MatchError;
use crate::models::{CompatibilityScore, MatchingCriteria, Profile, RankedMatch};
use crate::services::ProfileStore;

/// Entry point of the matching core
///
/// # Pipeline Stages
/// 1. Criteria validation
/// 2. Requester lookup
/// 3. Candidate retrieval (one store query)
/// 4. Parallel scoring, filtering and ranking
#[derive(Clone)]
pub struct MatchingEngine {
    store: Arc<dyn ProfileStore>,
    retriever: CandidateRetriever,
    ranker: Arc<Ranker>,
}

impl MatchingEngine {
    pub fn new(store: Arc<dyn ProfileStore>, scorer: CompatibilityScorer) -> Self {
        Self {
            retriever: CandidateRetriever::new(Arc::clone(&store)),
            store,
            ranker: Arc::new(Ranker::new(scorer)),
        }
    }

    pub fn with_standard_tables(store: Arc<dyn ProfileStore>) -> Self {
        Self::new(store, CompatibilityScorer::with_standard_tables())
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        self.ranker.scorer()
    }

    /// Compatibility of `profile_id_b` from the point of view of `profile_id_a`
    pub async fn calculate_compatibility(
        &self,
        profile_id_a: &str,
        profile_id_b: &str,
    ) -> Result<CompatibilityScore, MatchError> {
        let (a, b) = tokio::try_join!(
            self.load_profile(profile_id_a),
            self.load_profile(profile_id_b),
        )?;

        Ok(self.scorer().score(&a, &b))
    }

    /// Best matches for the requester in `criteria`, at most `limit` of them
    pub async fn find_matches(
        &self,
        criteria: &MatchingCriteria,
        limit: usize,
    ) -> Result<Vec<RankedMatch>, MatchError> {
        criteria.validate()?;

        let requester = self.load_profile(&criteria.profile_id).await?;
        let candidates = self.retriever.find_candidates(criteria).await?;
        let total_candidates = candidates.len();

        // Scoring is CPU-bound; keep it off the async workers
        let ranker = Arc::clone(&self.ranker);
        let matches = tokio::task::spawn_blocking(move || ranker.rank(&requester, candidates, limit)).await?;

        tracing::info!(
            "Returning {} matches for {} (from {} candidates)",
            matches.len(),
            criteria.profile_id,
            total_candidates
        );

        Ok(matches)
    }

    async fn load_profile(&self, id: &str) -> Result<Profile, MatchError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| MatchError::ProfileMissing(id.to_string()))
    }
}
