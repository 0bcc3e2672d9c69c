use std::collections::BTreeSet;

/// Neutral score used whenever there is not enough data to compare
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Jaccard index of two tag sets: |a ∩ b| / |a ∪ b|
///
/// Returns [`NEUTRAL_SCORE`] when either set is absent or empty, so missing
/// data is not penalized.
#[inline]
pub fn set_similarity(a: Option<&BTreeSet<String>>, b: Option<&BTreeSet<String>>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            let intersection = a.intersection(b).count() as f64;
            let union = a.union(b).count() as f64;
            intersection / union
        }
        _ => NEUTRAL_SCORE,
    }
}

/// Closeness of two numbers on a known scale: 1 - |v1 - v2| / scale, clamped to [0, 1]
///
/// A non-positive scale degenerates to exact equality.
#[inline]
pub fn numeric_alignment(v1: f64, v2: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return if v1 == v2 { 1.0 } else { 0.0 };
    }
    (1.0 - (v1 - v2).abs() / scale).clamp(0.0, 1.0)
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Round to two decimal places for presentation
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accumulates weighted factors where only present factors count
///
/// The result is the weighted mean of the factors that were added, or the
/// neutral score when none were.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMean {
    score: f64,
    weight: f64,
}

impl WeightedMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64, weight: f64) {
        self.score += value * weight;
        self.weight += weight;
    }

    /// Add a factor only when it could be computed
    pub fn add_opt(&mut self, value: Option<f64>, weight: f64) {
        if let Some(value) = value {
            self.add(value, weight);
        }
    }

    pub fn value(&self) -> f64 {
        if self.weight > 0.0 {
            self.score / self.weight
        } else {
            NEUTRAL_SCORE
        }
    }
}
