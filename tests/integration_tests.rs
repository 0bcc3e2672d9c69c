// Integration tests for Venture Match

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use venture_match::core::MIN_MATCH_SCORE;
use venture_match::models::{
    AgeRange, BusinessStage, CandidateFilters, CommunicationStyle, FamilyPlans, MatchAction, WorkLifeBalance,
};
use venture_match::services::InMemoryStore;
use venture_match::{MatchActionStore, MatchError, MatchingCriteria, MatchingEngine, Profile, ProfileStore, StoreError};

fn tags(items: &[&str]) -> Option<BTreeSet<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

fn create_founder(id: &str) -> Profile {
    let mut p = Profile::new(id);
    p.industry = Some("TECHNOLOGY".into());
    p.stage = Some(BusinessStage::Mvp);
    p.location = Some("Bangalore".into());
    p.values = tags(&["integrity", "impact"]);
    p.interests = tags(&["hiking", "chess"]);
    p.entrepreneurial_goals = tags(&["scale", "impact"]);
    p.work_life_balance = Some(WorkLifeBalance::Balanced);
    p.communication_style = Some(CommunicationStyle::Direct);
    p.family_plans = Some(FamilyPlans { wants_children: true, timeline: Some("3_YEARS".into()) });
    p.birth_year = Some(1994);
    p
}

fn create_mismatch(id: &str) -> Profile {
    let mut p = Profile::new(id);
    p.industry = Some("RETAIL".into());
    p.stage = Some(BusinessStage::Mature);
    p.location = Some("Delhi".into());
    p.values = tags(&["tradition"]);
    p.interests = tags(&["golf"]);
    p.entrepreneurial_goals = tags(&["lifestyle"]);
    p.work_life_balance = Some(WorkLifeBalance::LifeFocused);
    p.communication_style = Some(CommunicationStyle::Diplomatic);
    p.family_plans = Some(FamilyPlans { wants_children: false, timeline: None });
    p.birth_year = Some(1980);
    p
}

/// Requester plus ten candidates of which exactly three clear the threshold
fn create_pool() -> Vec<Profile> {
    let best = create_founder("best");

    let mut nearby = create_founder("nearby");
    nearby.location = Some("Mumbai".into());

    let mut analytical = create_founder("analytical");
    analytical.communication_style = Some(CommunicationStyle::Analytical);
    analytical.location = Some("Delhi".into());

    let mut pool = vec![create_founder("requester"), best, nearby, analytical];
    pool.extend((0..7).map(|i| create_mismatch(&format!("mismatch-{}", i))));
    pool
}

fn engine_with(store: Arc<InMemoryStore>) -> MatchingEngine {
    MatchingEngine::with_standard_tables(store)
}

#[tokio::test]
async fn test_find_matches_returns_only_good_candidates_sorted() {
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(create_pool())));

    let matches = engine
        .find_matches(&MatchingCriteria::for_profile("requester"), 20)
        .await
        .unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["best", "nearby", "analytical"]);

    for pair in matches.windows(2) {
        assert!(pair[0].compatibility.overall >= pair[1].compatibility.overall);
    }
    for m in &matches {
        assert!(m.compatibility.overall >= MIN_MATCH_SCORE);
        assert_ne!(m.profile.id, "requester");
    }
}

#[tokio::test]
async fn test_find_matches_respects_limit() {
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(create_pool())));

    let matches = engine
        .find_matches(&MatchingCriteria::for_profile("requester"), 2)
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].profile.id, "best");
}

#[tokio::test]
async fn test_find_matches_empty_when_nobody_qualifies() {
    let mut pool = vec![create_founder("requester")];
    pool.extend((0..5).map(|i| create_mismatch(&format!("m{}", i))));
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(pool)));

    let matches = engine
        .find_matches(&MatchingCriteria::for_profile("requester"), 20)
        .await
        .unwrap();

    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_find_matches_applies_criteria() {
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(create_pool())));

    let mut criteria = MatchingCriteria::for_profile("requester");
    criteria.location_preference = vec!["Mumbai".to_string(), "Delhi".to_string()];

    let matches = engine.find_matches(&criteria, 20).await.unwrap();
    let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();

    assert_eq!(ids, vec!["nearby", "analytical"]);
}

#[tokio::test]
async fn test_find_matches_excludes_contacted_profiles() {
    let store = Arc::new(InMemoryStore::with_profiles(create_pool()));
    store.record("requester", "best", MatchAction::Passed, None).await.unwrap();
    let engine = engine_with(store);

    let mut criteria = MatchingCriteria::for_profile("requester");
    let ids: Vec<String> = engine
        .find_matches(&criteria, 20)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.profile.id)
        .collect();
    assert_eq!(ids, vec!["nearby", "analytical"]);

    criteria.exclude_contacted = false;
    let matches = engine.find_matches(&criteria, 20).await.unwrap();
    assert_eq!(matches.len(), 3);
}

#[tokio::test]
async fn test_find_matches_unknown_requester() {
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(create_pool())));

    let result = engine.find_matches(&MatchingCriteria::for_profile("ghost"), 20).await;

    assert!(matches!(result, Err(MatchError::ProfileMissing(id)) if id == "ghost"));
}

#[tokio::test]
async fn test_calculate_compatibility() {
    let engine = engine_with(Arc::new(InMemoryStore::with_profiles(create_pool())));

    let first = engine.calculate_compatibility("requester", "best").await.unwrap();
    let second = engine.calculate_compatibility("requester", "best").await.unwrap();

    assert!(first.overall > 0.8);
    assert_eq!(first.overall.to_bits(), second.overall.to_bits());
    assert_eq!(first, second);

    let missing = engine.calculate_compatibility("requester", "ghost").await;
    assert!(matches!(missing, Err(MatchError::ProfileMissing(id)) if id == "ghost"));
}

/// Store that counts queries and optionally fails them
struct ProbeStore {
    inner: InMemoryStore,
    queries: AtomicUsize,
    fail_queries: bool,
}

#[async_trait]
impl ProfileStore for ProbeStore {
    async fn get(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        self.inner.get(id).await
    }

    async fn query(&self, filters: &CandidateFilters, limit: usize) -> Result<Vec<Profile>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries {
            return Err(StoreError::Backend("connection reset".to_string()));
        }
        self.inner.query(filters, limit).await
    }
}

fn probe(fail_queries: bool) -> Arc<ProbeStore> {
    Arc::new(ProbeStore {
        inner: InMemoryStore::with_profiles(create_pool()),
        queries: AtomicUsize::new(0),
        fail_queries,
    })
}

#[tokio::test]
async fn test_invalid_criteria_rejected_before_fetch() {
    let store = probe(false);
    let engine = MatchingEngine::with_standard_tables(store.clone());

    let mut criteria = MatchingCriteria::for_profile("requester");
    criteria.age_range = Some(AgeRange { min: 40, max: 30 });

    let result = engine.find_matches(&criteria, 20).await;

    assert!(matches!(result, Err(MatchError::InvalidCriteria(_))));
    assert_eq!(store.queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_store_failure_fails_whole_call() {
    let store = probe(true);
    let engine = MatchingEngine::with_standard_tables(store.clone());

    let result = engine.find_matches(&MatchingCriteria::for_profile("requester"), 20).await;

    assert!(matches!(result, Err(MatchError::Store(StoreError::Backend(_)))));
    assert_eq!(store.queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_single_fetch_per_retrieval() {
    let store = probe(false);
    let engine = MatchingEngine::with_standard_tables(store.clone());

    engine.find_matches(&MatchingCriteria::for_profile("requester"), 20).await.unwrap();

    assert_eq!(store.queries.load(Ordering::SeqCst), 1);
}
