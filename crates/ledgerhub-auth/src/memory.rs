//! In-memory collaborator implementations using Tokio mutexes, for
//! single-node deployments and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use ledgerhub_core::AppResult;
use ledgerhub_entity::auth::StoredSecret;
use ledgerhub_entity::permission::AccessRight;

use crate::access::repository::AccessRightRepository;
use crate::credentials::CredentialStore;

/// In-memory credential store keyed by username.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    /// Protected secret table.
    secrets: Arc<Mutex<HashMap<String, StoredSecret>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the secret for a username.
    pub async fn insert(&self, username: impl Into<String>, secret: StoredSecret) {
        self.secrets.lock().await.insert(username.into(), secret);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn lookup_secret(&self, username: &str) -> AppResult<Option<StoredSecret>> {
        Ok(self.secrets.lock().await.get(username).cloned())
    }
}

/// In-memory access right repository keyed by principal id.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccessRightRepository {
    /// Protected grant table.
    grants: Arc<Mutex<HashMap<Uuid, Vec<AccessRight>>>>,
}

impl MemoryAccessRightRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccessRightRepository for MemoryAccessRightRepository {
    async fn rights_of(&self, principal: Uuid) -> AppResult<Vec<AccessRight>> {
        Ok(self
            .grants
            .lock()
            .await
            .get(&principal)
            .cloned()
            .unwrap_or_default())
    }

    async fn grant(&self, principal: Uuid, right: AccessRight) -> AppResult<AccessRight> {
        let mut grants = self.grants.lock().await;
        let held = grants.entry(principal).or_default();

        // Grant set is de-duplicated on (resource_type, action).
        if let Some(existing) = held
            .iter()
            .find(|r| r.grants(&right.resource_type, right.action))
        {
            return Ok(existing.clone());
        }

        info!(
            principal = %principal,
            resource_type = %right.resource_type,
            action = %right.action,
            "Access right granted"
        );
        held.push(right.clone());
        Ok(right)
    }

    async fn revoke(&self, principal: Uuid, right_id: Uuid) -> AppResult<bool> {
        let mut grants = self.grants.lock().await;

        let Some(held) = grants.get_mut(&principal) else {
            warn!(principal = %principal, "Revoke for principal with no grants");
            return Ok(false);
        };

        let before = held.len();
        held.retain(|r| r.id != right_id);
        let removed = held.len() < before;

        if removed {
            info!(principal = %principal, right_id = %right_id, "Access right revoked");
        } else {
            warn!(
                principal = %principal,
                right_id = %right_id,
                "Attempted to revoke right that was not held"
            );
        }

        Ok(removed)
    }
}
