use std::sync::Arc;

use crate::core::similarity::{numeric_alignment, round2, set_similarity, unit_clamp, WeightedMean, NEUTRAL_SCORE};
use crate::core::tables::ScoringTables;
use crate::models::{CompatibilityScore, FamilyPlans, Profile};

/// Weights of the five compatibility dimensions in the overall score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    pub entrepreneurial: f64,
    pub personal_values: f64,
    pub lifestyle: f64,
    pub business_understanding: f64,
    pub family_goals: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            entrepreneurial: 0.25,
            personal_values: 0.25,
            lifestyle: 0.20,
            business_understanding: 0.15,
            family_goals: 0.15,
        }
    }
}

/// Raw (unrounded) dimension scores for one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScores {
    pub entrepreneurial: f64,
    pub personal_values: f64,
    pub lifestyle: f64,
    pub business_understanding: f64,
    pub family_goals: f64,
}

impl DimensionScores {
    /// Weighted sum of the dimensions, each clamped to [0, 1] first
    pub fn overall(&self, weights: &DimensionWeights) -> f64 {
        let total = unit_clamp(self.entrepreneurial) * weights.entrepreneurial
            + unit_clamp(self.personal_values) * weights.personal_values
            + unit_clamp(self.lifestyle) * weights.lifestyle
            + unit_clamp(self.business_understanding) * weights.business_understanding
            + unit_clamp(self.family_goals) * weights.family_goals;
        unit_clamp(total)
    }
}

const REASON_THRESHOLD: f64 = 0.8;
const HIGH_COMPATIBILITY: f64 = 0.8;
const GOOD_COMPATIBILITY: f64 = 0.6;

/// Scores compatibility between two already-loaded profiles
///
/// Scoring is pure: the same pair always yields the same score. Argument
/// order matters because lookup tables are directional; pass the requester
/// first.
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    tables: Arc<ScoringTables>,
    weights: DimensionWeights,
}

impl CompatibilityScorer {
    pub fn new(tables: Arc<ScoringTables>) -> Self {
        Self {
            tables,
            weights: DimensionWeights::default(),
        }
    }

    pub fn with_standard_tables() -> Self {
        Self::new(Arc::new(ScoringTables::standard()))
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Full compatibility score of `b` from the point of view of `a`
    ///
    /// Recommendation tiers use the unrounded overall, so a displayed 0.80 may
    /// still carry the top tier.
    pub fn score(&self, a: &Profile, b: &Profile) -> CompatibilityScore {
        let dims = self.dimensions(a, b);
        let overall = dims.overall(&self.weights);

        CompatibilityScore {
            overall: round2(overall),
            entrepreneurial_alignment: round2(unit_clamp(dims.entrepreneurial)),
            personal_values: round2(unit_clamp(dims.personal_values)),
            lifestyle_compatibility: round2(unit_clamp(dims.lifestyle)),
            business_understanding: round2(unit_clamp(dims.business_understanding)),
            family_goals: round2(unit_clamp(dims.family_goals)),
            reasons: compatibility_reasons(a, b, &dims),
            recommendations: recommendations(overall),
        }
    }

    /// The five raw dimension scores
    pub fn dimensions(&self, a: &Profile, b: &Profile) -> DimensionScores {
        DimensionScores {
            entrepreneurial: self.entrepreneurial_alignment(a, b),
            personal_values: self.personal_values_alignment(a, b),
            lifestyle: self.lifestyle_compatibility(a, b),
            business_understanding: business_understanding(a, b),
            family_goals: family_goals_alignment(a, b),
        }
    }

    /// Stage fit (0.3), industry synergy (0.2), shared goals (0.3), risk appetite (0.2)
    pub fn entrepreneurial_alignment(&self, a: &Profile, b: &Profile) -> f64 {
        let mut mean = WeightedMean::new();

        if let (Some(sa), Some(sb)) = (a.stage, b.stage) {
            mean.add(self.tables.stage.lookup(&sa, &sb), 0.3);
        }

        mean.add_opt(self.industry_synergy(a, b), 0.2);

        if a.entrepreneurial_goals.is_some() && b.entrepreneurial_goals.is_some() {
            let goals = set_similarity(a.entrepreneurial_goals.as_ref(), b.entrepreneurial_goals.as_ref());
            mean.add(goals, 0.3);
        }

        if let (Some(sa), Some(sb)) = (a.stage, b.stage) {
            mean.add(numeric_alignment(sa.risk_appetite(), sb.risk_appetite(), 1.0), 0.2);
        }

        mean.value()
    }

    /// Shared values (0.4), family plans (0.3), communication style (0.3)
    pub fn personal_values_alignment(&self, a: &Profile, b: &Profile) -> f64 {
        let mut mean = WeightedMean::new();

        if a.values.is_some() && b.values.is_some() {
            mean.add(set_similarity(a.values.as_ref(), b.values.as_ref()), 0.4);
        }

        if let (Some(pa), Some(pb)) = (&a.family_plans, &b.family_plans) {
            mean.add(family_plans_compatibility(pa, pb), 0.3);
        }

        if let (Some(ca), Some(cb)) = (a.communication_style, b.communication_style) {
            mean.add(self.tables.communication.lookup(&ca, &cb), 0.3);
        }

        mean.value()
    }

    /// Work-life balance (0.4), location (0.3), shared interests (0.3)
    pub fn lifestyle_compatibility(&self, a: &Profile, b: &Profile) -> f64 {
        let mut mean = WeightedMean::new();

        if let (Some(wa), Some(wb)) = (a.work_life_balance, b.work_life_balance) {
            mean.add(self.tables.work_life.lookup(&wa, &wb), 0.4);
        }

        if let (Some(la), Some(lb)) = (text(&a.location), text(&b.location)) {
            mean.add(self.location_compatibility(la, lb), 0.3);
        }

        if a.interests.is_some() && b.interests.is_some() {
            mean.add(set_similarity(a.interests.as_ref(), b.interests.as_ref()), 0.3);
        }

        mean.value()
    }

    /// 1.0 same city, 0.8 same metro cluster, 0.3 otherwise
    pub fn location_compatibility(&self, a: &str, b: &str) -> f64 {
        if a == b {
            1.0
        } else if self.tables.metro_clusters.share_cluster(a, b) {
            0.8
        } else {
            0.3
        }
    }

    fn industry_synergy(&self, a: &Profile, b: &Profile) -> Option<f64> {
        let (ia, ib) = (text(&a.industry)?, text(&b.industry)?);
        if ia == ib {
            Some(0.8)
        } else {
            Some(self.tables.industry_synergy.lookup(ia, ib))
        }
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::with_standard_tables()
    }
}

/// Both founders know what running a company takes, so the floor is 0.7
pub fn business_understanding(a: &Profile, b: &Profile) -> f64 {
    let mut score: f64 = 0.7;

    if same_text(&a.industry, &b.industry) {
        score += 0.2;
    }
    if same_value(&a.stage, &b.stage) {
        score += 0.1;
    }

    score.min(1.0)
}

pub fn family_goals_alignment(a: &Profile, b: &Profile) -> f64 {
    match (&a.family_plans, &b.family_plans) {
        (Some(pa), Some(pb)) => family_plans_compatibility(pa, pb),
        _ => NEUTRAL_SCORE,
    }
}

/// 0.2 if one wants children and the other doesn't, 0.6 if only timelines
/// differ, 0.9 otherwise
pub fn family_plans_compatibility(a: &FamilyPlans, b: &FamilyPlans) -> f64 {
    if a.wants_children != b.wants_children {
        0.2
    } else if a.timeline != b.timeline {
        0.6
    } else {
        0.9
    }
}

/// Free-text field with blank values treated as absent
#[inline]
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Non-blank on both sides and equal
#[inline]
fn same_text(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((text(a), text(b)), (Some(x), Some(y)) if x == y)
}

/// Present on both sides and equal
#[inline]
fn same_value<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn compatibility_reasons(a: &Profile, b: &Profile, dims: &DimensionScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if dims.entrepreneurial > REASON_THRESHOLD {
        reasons.push("Strong entrepreneurial mindset alignment".to_string());
    }
    if dims.personal_values > REASON_THRESHOLD {
        reasons.push("Shared personal values and life philosophy".to_string());
    }
    if dims.lifestyle > REASON_THRESHOLD {
        reasons.push("Compatible lifestyle preferences".to_string());
    }
    if same_text(&a.industry, &b.industry) {
        reasons.push("Same industry experience - mutual understanding".to_string());
    }
    if same_text(&a.location, &b.location) {
        reasons.push("Same location - no distance barriers".to_string());
    }

    reasons
}

fn recommendations(overall: f64) -> Vec<String> {
    let pair: [&str; 2] = if overall > HIGH_COMPATIBILITY {
        [
            "Highly compatible match - consider connecting",
            "Strong potential for understanding each other's entrepreneurial journey",
        ]
    } else if overall > GOOD_COMPATIBILITY {
        [
            "Good compatibility - worth exploring further",
            "Take time to understand each other's business goals",
        ]
    } else {
        [
            "Some compatibility challenges - proceed with awareness",
            "Focus on shared interests outside of business",
        ]
    };

    pair.iter().map(|s| s.to_string()).collect()
}
