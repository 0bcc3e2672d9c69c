// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranker;
pub mod retriever;
pub mod scoring;
pub mod similarity;
pub mod tables;

pub use filters::{build_candidate_filters, matches_filters};
pub use matcher::MatchingEngine;
pub use ranker::{Ranker, MIN_MATCH_SCORE};
pub use retriever::{CandidateRetriever, CANDIDATE_POOL_SIZE};
pub use scoring::{CompatibilityScorer, DimensionScores, DimensionWeights};
pub use similarity::{numeric_alignment, set_similarity, NEUTRAL_SCORE};
pub use tables::{LookupTable, MetroClusters, ScoringTables};
