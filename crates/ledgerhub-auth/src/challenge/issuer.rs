//! Salt/nonce issuance.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::debug;

use ledgerhub_core::config::auth::AuthConfig;
use ledgerhub_core::error::ErrorKind;
use ledgerhub_core::{AppError, AppResult};
use ledgerhub_entity::auth::ChallengeKey;

use super::store::ChallengeStore;

/// Issues a fresh, unpredictable salt per authentication attempt and
/// registers the pending challenge.
#[derive(Clone)]
pub struct ChallengeIssuer {
    /// Shared pending-challenge store.
    store: Arc<dyn ChallengeStore>,
    /// Number of random bytes per salt.
    salt_length: usize,
}

impl std::fmt::Debug for ChallengeIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeIssuer")
            .field("salt_length", &self.salt_length)
            .finish()
    }
}

impl ChallengeIssuer {
    /// Creates an issuer backed by the given store.
    pub fn new(store: Arc<dyn ChallengeStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            salt_length: config.salt_length_bytes,
        }
    }

    /// Issues a salt for one authentication attempt by `username`.
    ///
    /// The salt is `salt_length_bytes` of OS randomness, base64url-encoded
    /// without padding. Registration of the pending challenge happens
    /// before the salt is returned, so a returned salt is always
    /// consumable exactly once. Fails with an unavailable error if the
    /// randomness source cannot be read; the failure is not retried here.
    pub async fn issue(&self, username: &str) -> AppResult<String> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }

        let mut bytes = vec![0u8; self.salt_length];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            AppError::with_source(ErrorKind::Unavailable, "Randomness source unavailable", e)
        })?;
        let salt = URL_SAFE_NO_PAD.encode(&bytes);

        self.store
            .register(ChallengeKey::new(username, &salt), Utc::now())
            .await?;

        debug!(username = %username, "Issued authentication challenge");
        Ok(salt)
    }
}
