//! Authentication orchestration.

use std::sync::Arc;

use tracing::{debug, info};

use ledgerhub_core::AppResult;
use ledgerhub_core::config::auth::AuthConfig;
use ledgerhub_entity::auth::AuthAttempt;

use crate::challenge::{ChallengeStore, FreshnessOutcome, ReplayEnforcer};
use crate::credentials::CredentialStore;
use crate::verifier::HashVerifier;

/// The caller-visible result of evaluating one attempt.
///
/// Uniform by design: unknown user, wrong hash, expired timestamp, and
/// replayed challenge all collapse into [`AuthDecision::Failed`]. The
/// internal distinctions are logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// The attempt passed replay enforcement and hash verification.
    Authenticated {
        /// The authenticated principal's username.
        username: String,
    },
    /// The attempt failed; the reason is not disclosed.
    Failed,
}

impl AuthDecision {
    /// Whether the attempt was accepted.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Sequences replay enforcement, credential lookup, and hash
/// verification for incoming attempts.
#[derive(Clone)]
pub struct Authenticator {
    /// Replay-window enforcement.
    enforcer: ReplayEnforcer,
    /// Salted-hash verification.
    verifier: HashVerifier,
    /// Credential collaborator.
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish()
    }
}

impl Authenticator {
    /// Creates an authenticator over the shared challenge store and the
    /// credential collaborator.
    pub fn new(
        challenges: Arc<dyn ChallengeStore>,
        credentials: Arc<dyn CredentialStore>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            enforcer: ReplayEnforcer::new(challenges, config),
            verifier: HashVerifier::new(),
            credentials,
        }
    }

    /// Evaluates one authentication attempt.
    ///
    /// Replay enforcement runs first; the hash verifier only runs on an
    /// accepted challenge. Security-relevant failures return
    /// `Ok(AuthDecision::Failed)`; only operational errors (the credential
    /// store being unreachable, for instance) propagate as `Err`, so the
    /// caller can retry or alert without learning anything about the
    /// credentials involved.
    pub async fn authenticate(&self, attempt: &AuthAttempt) -> AppResult<AuthDecision> {
        match self.enforcer.check_freshness(attempt).await? {
            FreshnessOutcome::Accepted => {}
            outcome => {
                debug!(
                    username = %attempt.username,
                    outcome = ?outcome,
                    "Challenge rejected before verification"
                );
                return Ok(AuthDecision::Failed);
            }
        }

        let secret = self.credentials.lookup_secret(&attempt.username).await?;

        if self.verifier.verify(attempt, secret.as_ref()) {
            info!(username = %attempt.username, "Authentication succeeded");
            Ok(AuthDecision::Authenticated {
                username: attempt.username.clone(),
            })
        } else {
            debug!(username = %attempt.username, "Hash verification failed");
            Ok(AuthDecision::Failed)
        }
    }
}
