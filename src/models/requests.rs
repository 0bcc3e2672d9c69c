use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::BusinessStage;

/// Criteria for finding matches for one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_age_range"))]
pub struct MatchingCriteria {
    #[validate(length(min = 1))]
    #[serde(alias = "userId")]
    pub profile_id: String,
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub location_preference: Vec<String>,
    #[serde(default)]
    pub industry_preference: Vec<String>,
    #[serde(default)]
    pub stage_preference: Vec<BusinessStage>,
    #[serde(default = "default_exclude_contacted")]
    pub exclude_contacted: bool,
}

impl MatchingCriteria {
    /// Criteria with no filters beyond the requester's own id
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            age_range: None,
            location_preference: Vec::new(),
            industry_preference: Vec::new(),
            stage_preference: Vec::new(),
            exclude_contacted: default_exclude_contacted(),
        }
    }
}

fn default_exclude_contacted() -> bool {
    true
}

/// Inclusive age bounds in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

fn validate_age_range(criteria: &MatchingCriteria) -> Result<(), ValidationError> {
    match criteria.age_range {
        Some(range) if range.min > range.max => {
            let mut error = ValidationError::new("age_range");
            error.message = Some(
                format!("minimum age {} exceeds maximum age {}", range.min, range.max).into(),
            );
            Err(error)
        }
        _ => Ok(()),
    }
}
