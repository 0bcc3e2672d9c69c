use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Entrepreneur profile as seen by the matching core
///
/// Every descriptive field is optional. A missing field is a normal state and
/// the scorer maps it to a neutral value rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub stage: Option<BusinessStage>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub values: Option<BTreeSet<String>>,
    #[serde(default)]
    pub interests: Option<BTreeSet<String>>,
    #[serde(default)]
    pub entrepreneurial_goals: Option<BTreeSet<String>>,
    #[serde(default)]
    pub work_life_balance: Option<WorkLifeBalance>,
    #[serde(default)]
    pub communication_style: Option<CommunicationStyle>,
    #[serde(default)]
    pub family_plans: Option<FamilyPlans>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Profile {
    /// Bare active profile with nothing but an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            industry: None,
            stage: None,
            location: None,
            values: None,
            interests: None,
            entrepreneurial_goals: None,
            work_life_balance: None,
            communication_style: None,
            family_plans: None,
            birth_year: None,
            is_active: true,
        }
    }
}

fn default_true() -> bool { true }

/// Declared business maturity, ordered from earliest to latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStage {
    Idea,
    Mvp,
    EarlyStage,
    Growth,
    Mature,
}

impl BusinessStage {
    pub const ALL: [BusinessStage; 5] = [
        BusinessStage::Idea,
        BusinessStage::Mvp,
        BusinessStage::EarlyStage,
        BusinessStage::Growth,
        BusinessStage::Mature,
    ];

    /// Appetite for risk typical of a founder at this stage (0-1)
    ///
    /// Strictly decreasing from `Idea` to `Mature`.
    pub fn risk_appetite(self) -> f64 {
        match self {
            BusinessStage::Idea => 0.9,
            BusinessStage::Mvp => 0.7,
            BusinessStage::EarlyStage => 0.6,
            BusinessStage::Growth => 0.4,
            BusinessStage::Mature => 0.3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessStage::Idea => "IDEA",
            BusinessStage::Mvp => "MVP",
            BusinessStage::EarlyStage => "EARLY_STAGE",
            BusinessStage::Growth => "GROWTH",
            BusinessStage::Mature => "MATURE",
        }
    }
}

impl fmt::Display for BusinessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown business stage: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkLifeBalance {
    WorkFocused,
    Balanced,
    LifeFocused,
}

impl WorkLifeBalance {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkLifeBalance::WorkFocused => "WORK_FOCUSED",
            WorkLifeBalance::Balanced => "BALANCED",
            WorkLifeBalance::LifeFocused => "LIFE_FOCUSED",
        }
    }
}

impl FromStr for WorkLifeBalance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WORK_FOCUSED" => Ok(WorkLifeBalance::WorkFocused),
            "BALANCED" => Ok(WorkLifeBalance::Balanced),
            "LIFE_FOCUSED" => Ok(WorkLifeBalance::LifeFocused),
            other => Err(format!("unknown work-life balance: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationStyle {
    Direct,
    Diplomatic,
    Analytical,
}

impl CommunicationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "DIRECT",
            CommunicationStyle::Diplomatic => "DIPLOMATIC",
            CommunicationStyle::Analytical => "ANALYTICAL",
        }
    }
}

impl FromStr for CommunicationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIRECT" => Ok(CommunicationStyle::Direct),
            "DIPLOMATIC" => Ok(CommunicationStyle::Diplomatic),
            "ANALYTICAL" => Ok(CommunicationStyle::Analytical),
            other => Err(format!("unknown communication style: {}", other)),
        }
    }
}

/// Family intentions declared on a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyPlans {
    pub wants_children: bool,
    #[serde(default, alias = "timelineForFamily")]
    pub timeline: Option<String>,
}

/// Store-facing filters derived from matching criteria
///
/// Empty membership lists mean "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFilters {
    pub exclude_id: String,
    /// Inclusive `(earliest, latest)` birth year
    pub birth_year_range: Option<(i32, i32)>,
    pub locations: Vec<String>,
    pub industries: Vec<String>,
    pub stages: Vec<BusinessStage>,
    pub require_active: bool,
    pub exclude_contacted: bool,
}

/// Action one profile takes on another after seeing it in results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchAction {
    Viewed,
    Liked,
    Passed,
    Connected,
}

impl MatchAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchAction::Viewed => "VIEWED",
            MatchAction::Liked => "LIKED",
            MatchAction::Passed => "PASSED",
            MatchAction::Connected => "CONNECTED",
        }
    }
}

/// Acknowledgement returned when a match action is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAck {
    pub action_id: uuid::Uuid,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
