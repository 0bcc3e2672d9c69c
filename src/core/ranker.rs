use rayon::prelude::*;
use std::cmp::Ordering;

use crate::core::scoring::CompatibilityScorer;
use crate::models::{Profile, RankedMatch};

/// Minimum overall score a candidate needs to be returned
pub const MIN_MATCH_SCORE: f64 = 0.6;

/// Scores, filters, sorts and truncates a candidate pool
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: CompatibilityScorer,
}

impl Ranker {
    pub fn new(scorer: CompatibilityScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    /// Rank `candidates` against `requester`
    ///
    /// # Pipeline Stages
    /// 1. Drop the requester's own profile
    /// 2. Score every candidate in parallel
    /// 3. Keep overall scores of at least [`MIN_MATCH_SCORE`]
    /// 4. Sort by overall score descending, then candidate id ascending
    /// 5. Truncate to `limit`
    pub fn rank(&self, requester: &Profile, candidates: Vec<Profile>, limit: usize) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = candidates
            .into_par_iter()
            .filter(|candidate| candidate.id != requester.id)
            .map(|candidate| {
                let compatibility = self.scorer.score(requester, &candidate);
                RankedMatch {
                    profile: candidate,
                    compatibility,
                }
            })
            .filter(|m| m.compatibility.overall >= MIN_MATCH_SCORE)
            .collect();

        ranked.sort_by(|a, b| {
            b.compatibility
                .overall
                .partial_cmp(&a.compatibility.overall)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.profile.id.cmp(&b.profile.id))
        });

        ranked.truncate(limit);
        ranked
    }
}
