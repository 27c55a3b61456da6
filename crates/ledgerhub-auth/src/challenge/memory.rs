//! In-memory challenge store using a Tokio mutex for single-node
//! deployments.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use ledgerhub_core::{AppError, AppResult};
use ledgerhub_entity::auth::{ChallengeKey, ChallengeState};

use super::store::{ChallengeStore, ConsumeResult};

/// In-memory challenge store using a Tokio mutex for thread safety.
///
/// Suitable for single-node deployments only.
#[derive(Debug, Clone, Default)]
pub struct MemoryChallengeStore {
    /// Protected challenge table.
    entries: Arc<Mutex<HashMap<ChallengeKey, ChallengeState>>>,
}

impl MemoryChallengeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held (pending and consumed markers).
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl ChallengeStore for MemoryChallengeStore {
    async fn register(&self, key: ChallengeKey, issued_at: DateTime<Utc>) -> AppResult<()> {
        let mut entries = self.entries.lock().await;

        if entries.contains_key(&key) {
            // A consumed challenge is terminal; a pending one must not be
            // silently re-issued under the same salt either.
            return Err(AppError::conflict(format!(
                "Challenge already registered for user '{}'",
                key.username
            )));
        }

        entries.insert(key, ChallengeState::Pending { issued_at });
        Ok(())
    }

    async fn consume(&self, key: &ChallengeKey, now: DateTime<Utc>) -> AppResult<ConsumeResult> {
        let mut entries = self.entries.lock().await;

        match entries.get(key).copied() {
            Some(ChallengeState::Pending { issued_at }) => {
                entries.insert(key.clone(), ChallengeState::Consumed { consumed_at: now });
                Ok(ConsumeResult::Consumed { issued_at })
            }
            Some(ChallengeState::Consumed { .. }) => Ok(ConsumeResult::AlreadyConsumed),
            None => Ok(ConsumeResult::Unknown),
        }
    }

    async fn sweep(&self, now: DateTime<Utc>, ttl: Duration) -> AppResult<u32> {
        let mut entries = self.entries.lock().await;

        let before = entries.len();
        entries.retain(|_, state| now.signed_duration_since(state.as_of()) <= ttl);
        let removed = (before - entries.len()) as u32;

        if removed > 0 {
            debug!(removed, remaining = entries.len(), "Swept stale challenges");
        }

        Ok(removed)
    }
}
