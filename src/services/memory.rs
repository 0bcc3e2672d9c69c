use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

use crate::core::filters::matches_filters;
use crate::models::{CandidateFilters, MatchAck, MatchAction, Profile};
use crate::services::store::{MatchActionStore, ProfileStore, StoreError};

/// Action stored by [`InMemoryStore`]
#[derive(Debug, Clone)]
pub struct RecordedAction {
    pub from_id: String,
    pub to_id: String,
    pub action: MatchAction,
    pub message: Option<String>,
    pub ack: MatchAck,
}

/// Process-local profile and action store
///
/// Useful for tests and for embedding the engine without a database.
/// Queries return profiles in id order. With `exclude_contacted`, profiles
/// the requester has recorded any action against are hidden.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: RwLock<BTreeMap<String, Profile>>,
    actions: RwLock<Vec<RecordedAction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles<I: IntoIterator<Item = Profile>>(profiles: I) -> Self {
        Self {
            profiles: RwLock::new(profiles.into_iter().map(|p| (p.id.clone(), p)).collect()),
            actions: RwLock::new(Vec::new()),
        }
    }

    /// Insert or replace a profile
    pub async fn upsert(&self, profile: Profile) {
        self.profiles.write().await.insert(profile.id.clone(), profile);
    }

    pub async fn actions(&self) -> Vec<RecordedAction> {
        self.actions.read().await.clone()
    }

    async fn contacted_by(&self, from_id: &str) -> HashSet<String> {
        self.actions
            .read()
            .await
            .iter()
            .filter(|a| a.from_id == from_id)
            .map(|a| a.to_id.clone())
            .collect()
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn query(&self, filters: &CandidateFilters, limit: usize) -> Result<Vec<Profile>, StoreError> {
        let contacted = if filters.exclude_contacted {
            self.contacted_by(&filters.exclude_id).await
        } else {
            HashSet::new()
        };

        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .filter(|p| matches_filters(filters, p))
            .filter(|p| !contacted.contains(&p.id))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MatchActionStore for InMemoryStore {
    async fn record(
        &self,
        from_id: &str,
        to_id: &str,
        action: MatchAction,
        message: Option<&str>,
    ) -> Result<MatchAck, StoreError> {
        if from_id == to_id {
            return Err(StoreError::InvalidInput(format!(
                "profile {} cannot act on itself",
                from_id
            )));
        }

        let ack = MatchAck {
            action_id: uuid::Uuid::new_v4(),
            recorded_at: chrono::Utc::now(),
        };

        self.actions.write().await.push(RecordedAction {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            action,
            message: message.map(str::to_string),
            ack: ack.clone(),
        });

        tracing::debug!("Recorded action: {} -> {} ({})", from_id, to_id, action.as_str());

        Ok(ack)
    }
}
