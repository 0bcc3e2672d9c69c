//! Venture Match - compatibility scoring for entrepreneur partner matching
//!
//! This library scores how well two founder profiles fit together and ranks
//! a bounded pool of candidates for a requesting profile.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CompatibilityScorer, MatchingEngine, Ranker, ScoringTables, set_similarity};
pub use error::MatchError;
pub use models::{Profile, MatchingCriteria, CompatibilityScore, RankedMatch};
pub use services::{ProfileStore, MatchActionStore, StoreError};
