// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, BusinessStage, WorkLifeBalance, CommunicationStyle, FamilyPlans, CandidateFilters, MatchAction, MatchAck};
pub use requests::{MatchingCriteria, AgeRange};
pub use responses::{CompatibilityScore, RankedMatch};
