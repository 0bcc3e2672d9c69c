use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{CandidateFilters, Profile};
use crate::services::store::{ProfileStore, StoreError};

/// In-memory cache in front of another [`ProfileStore`]
///
/// Only single-profile lookups are cached; candidate queries always go to
/// the inner store so filters see fresh data. Missing profiles are not
/// cached.
pub struct CachedProfileStore {
    inner: Arc<dyn ProfileStore>,
    l1_cache: moka::future::Cache<String, Profile>,
}

impl CachedProfileStore {
    pub fn new(inner: Arc<dyn ProfileStore>, l1_size: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, l1_cache }
    }

    /// Drop a cached profile, e.g. after it was edited
    pub async fn invalidate(&self, id: &str) {
        self.l1_cache.invalidate(id).await;
    }

    pub fn invalidate_all(&self) {
        self.l1_cache.invalidate_all();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            l1_size: self.l1_cache.entry_count(),
        }
    }
}

#[async_trait]
impl ProfileStore for CachedProfileStore {
    async fn get(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        if let Some(profile) = self.l1_cache.get(id).await {
            tracing::trace!("L1 cache hit: profile:{}", id);
            return Ok(Some(profile));
        }

        tracing::trace!("Cache miss: profile:{}", id);
        let profile = self.inner.get(id).await?;
        if let Some(profile) = &profile {
            self.l1_cache.insert(id.to_string(), profile.clone()).await;
        }

        Ok(profile)
    }

    async fn query(&self, filters: &CandidateFilters, limit: usize) -> Result<Vec<Profile>, StoreError> {
        self.inner.query(filters, limit).await
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub l1_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryStore;

    #[tokio::test]
    async fn test_cached_get_survives_inner_change() {
        let inner = Arc::new(InMemoryStore::with_profiles([Profile::new("p1")]));
        let cache = CachedProfileStore::new(inner.clone(), 100, 60);

        assert!(cache.get("p1").await.unwrap().is_some());

        let mut edited = Profile::new("p1");
        edited.location = Some("Pune".to_string());
        inner.upsert(edited).await;

        // Still served from L1
        assert_eq!(cache.get("p1").await.unwrap().unwrap().location, None);

        cache.invalidate("p1").await;
        assert_eq!(
            cache.get("p1").await.unwrap().unwrap().location.as_deref(),
            Some("Pune")
        );
    }

    #[tokio::test]
    async fn test_missing_profile_not_cached() {
        let inner = Arc::new(InMemoryStore::new());
        let cache = CachedProfileStore::new(inner.clone(), 100, 60);

        assert!(cache.get("late").await.unwrap().is_none());
        inner.upsert(Profile::new("late")).await;
        assert!(cache.get("late").await.unwrap().is_some());
    }
}
