//! Fixed lookup data used by the compatibility scorer.
//!
//! Tables are built once and shared read-only (usually behind an `Arc`).
//! They are directional: `lookup(row, col)` may differ from `lookup(col, row)`.
//! The scorer always passes the requester's value as the row and the
//! candidate's value as the column.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{BusinessStage, CommunicationStyle, WorkLifeBalance};

/// Two-level directional lookup table with a fallback value
#[derive(Debug, Clone)]
pub struct LookupTable<K> {
    rows: HashMap<K, HashMap<K, f64>>,
    default: f64,
}

impl<K: Eq + Hash> LookupTable<K> {
    pub fn new(default: f64) -> Self {
        Self {
            rows: HashMap::new(),
            default,
        }
    }

    /// Set the value for `(row, col)` only
    pub fn with(mut self, row: K, col: K, value: f64) -> Self {
        self.rows.entry(row).or_default().insert(col, value);
        self
    }

    /// Value for `(row, col)`, or the table default when the pair is absent
    pub fn lookup<Q>(&self, row: &Q, col: &Q) -> f64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows
            .get(row)
            .and_then(|cols| cols.get(col))
            .copied()
            .unwrap_or(self.default)
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }
}

/// Groups of cities treated as one commuting region
#[derive(Debug, Clone)]
pub struct MetroClusters {
    clusters: Vec<Vec<String>>,
}

impl MetroClusters {
    pub fn new<I, C, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clusters: clusters
                .into_iter()
                .map(|c| c.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// True when some cluster contains both locations
    pub fn share_cluster(&self, a: &str, b: &str) -> bool {
        self.clusters
            .iter()
            .any(|cluster| cluster.iter().any(|c| c == a) && cluster.iter().any(|c| c == b))
    }
}

/// All lookup data the scorer needs
#[derive(Debug, Clone)]
pub struct ScoringTables {
    pub stage: LookupTable<BusinessStage>,
    pub industry_synergy: LookupTable<String>,
    pub communication: LookupTable<CommunicationStyle>,
    pub work_life: LookupTable<WorkLifeBalance>,
    pub metro_clusters: MetroClusters,
}

impl ScoringTables {
    /// The production tables
    pub fn standard() -> Self {
        Self {
            stage: stage_table(),
            industry_synergy: industry_synergy_table(),
            communication: communication_table(),
            work_life: work_life_table(),
            metro_clusters: metro_clusters(),
        }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn stage_table() -> LookupTable<BusinessStage> {
    use BusinessStage::*;

    const ROWS: [(BusinessStage, [f64; 5]); 5] = [
        (Idea, [0.9, 0.8, 0.6, 0.4, 0.3]),
        (Mvp, [0.8, 0.9, 0.8, 0.6, 0.4]),
        (EarlyStage, [0.6, 0.8, 0.9, 0.8, 0.6]),
        (Growth, [0.4, 0.6, 0.8, 0.9, 0.8]),
        (Mature, [0.3, 0.4, 0.6, 0.8, 0.9]),
    ];

    let mut table = LookupTable::new(0.5);
    for (row, values) in ROWS {
        for (col, value) in BusinessStage::ALL.into_iter().zip(values) {
            table = table.with(row, col, value);
        }
    }
    table
}

// Only the listed directions exist; e.g. TECHNOLOGY -> ECOMMERCE is absent
// while ECOMMERCE -> TECHNOLOGY is 0.6.
fn industry_synergy_table() -> LookupTable<String> {
    const PAIRS: [(&str, &str, f64); 10] = [
        ("TECHNOLOGY", "FINTECH", 0.8),
        ("TECHNOLOGY", "HEALTHTECH", 0.7),
        ("TECHNOLOGY", "EDTECH", 0.7),
        ("FINTECH", "TECHNOLOGY", 0.8),
        ("FINTECH", "ECOMMERCE", 0.6),
        ("HEALTHTECH", "TECHNOLOGY", 0.7),
        ("HEALTHTECH", "BIOTECH", 0.8),
        ("ECOMMERCE", "TECHNOLOGY", 0.6),
        ("ECOMMERCE", "RETAIL", 0.7),
        ("ECOMMERCE", "LOGISTICS", 0.8),
    ];

    PAIRS
        .into_iter()
        .fold(LookupTable::new(0.4), |table, (row, col, value)| {
            table.with(row.to_string(), col.to_string(), value)
        })
}

fn communication_table() -> LookupTable<CommunicationStyle> {
    use CommunicationStyle::*;

    LookupTable::new(0.5)
        .with(Direct, Direct, 0.8)
        .with(Direct, Diplomatic, 0.6)
        .with(Direct, Analytical, 0.7)
        .with(Diplomatic, Direct, 0.6)
        .with(Diplomatic, Diplomatic, 0.9)
        .with(Diplomatic, Analytical, 0.5)
        .with(Analytical, Direct, 0.7)
        .with(Analytical, Diplomatic, 0.5)
        .with(Analytical, Analytical, 0.8)
}

fn work_life_table() -> LookupTable<WorkLifeBalance> {
    use WorkLifeBalance::*;

    LookupTable::new(0.5)
        .with(WorkFocused, WorkFocused, 0.9)
        .with(WorkFocused, Balanced, 0.6)
        .with(WorkFocused, LifeFocused, 0.3)
        .with(Balanced, WorkFocused, 0.6)
        .with(Balanced, Balanced, 0.9)
        .with(Balanced, LifeFocused, 0.6)
        .with(LifeFocused, WorkFocused, 0.3)
        .with(LifeFocused, Balanced, 0.6)
        .with(LifeFocused, LifeFocused, 0.9)
}

fn metro_clusters() -> MetroClusters {
    MetroClusters::new([
        vec!["Mumbai", "Pune", "Bangalore"],
        vec!["Delhi", "Gurgaon", "Noida"],
        vec!["Chennai", "Hyderabad", "Bangalore"],
        vec!["San Francisco", "San Jose", "Palo Alto"],
        vec!["New York", "Jersey City", "Brooklyn"],
    ])
}
