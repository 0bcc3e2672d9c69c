use serde::{Deserialize, Serialize};
use crate::models::domain::Profile;

/// Compatibility between two profiles
///
/// Every numeric field lies in [0, 1] and is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub overall: f64,
    pub entrepreneurial_alignment: f64,
    pub personal_values: f64,
    pub lifestyle_compatibility: f64,
    pub business_understanding: f64,
    pub family_goals: f64,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A candidate together with its score against the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub profile: Profile,
    pub compatibility: CompatibilityScore,
}
