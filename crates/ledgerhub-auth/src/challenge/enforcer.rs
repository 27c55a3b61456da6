//! Replay-window enforcement.

use std::sync::Arc;

use chrono::{Duration, Utc};

use ledgerhub_core::AppResult;
use ledgerhub_core::config::auth::AuthConfig;
use ledgerhub_entity::auth::{AuthAttempt, ChallengeKey};

use super::store::{ChallengeStore, ConsumeResult};

/// Outcome of the freshness/uniqueness check for one attempt.
///
/// Internal diagnostic detail only: callers above the authenticator see a
/// uniform failure, never these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessOutcome {
    /// The challenge was pending and the timestamp is inside the window.
    Accepted,
    /// The attempt timestamp falls outside the freshness window.
    Expired,
    /// The `(username, salt)` pair was already presented once.
    Reused,
    /// The `(username, salt)` pair was never issued (or has been swept).
    UnknownChallenge,
}

/// Rejects attempts whose `(username, salt)` pair is unknown or already
/// consumed, or whose timestamp falls outside the freshness window.
#[derive(Clone)]
pub struct ReplayEnforcer {
    /// Shared pending-challenge store.
    store: Arc<dyn ChallengeStore>,
    /// Maximum allowed attempt age (and forward skew).
    window: Duration,
}

impl std::fmt::Debug for ReplayEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayEnforcer")
            .field("window", &self.window)
            .finish()
    }
}

impl ReplayEnforcer {
    /// Creates an enforcer backed by the given store.
    pub fn new(store: Arc<dyn ChallengeStore>, config: &AuthConfig) -> Self {
        Self {
            store,
            window: Duration::seconds(config.freshness_window_seconds as i64),
        }
    }

    /// Checks the attempt's uniqueness and freshness.
    ///
    /// The challenge is consumed atomically with the lookup, whatever the
    /// outcome — a challenge that fails the freshness check is just as
    /// spent as one that passes, so retrying with the same salt always
    /// yields [`FreshnessOutcome::Reused`].
    pub async fn check_freshness(&self, attempt: &AuthAttempt) -> AppResult<FreshnessOutcome> {
        let key = ChallengeKey::new(&attempt.username, &attempt.salt);
        let now = Utc::now();

        match self.store.consume(&key, now).await? {
            ConsumeResult::Unknown => Ok(FreshnessOutcome::UnknownChallenge),
            ConsumeResult::AlreadyConsumed => Ok(FreshnessOutcome::Reused),
            ConsumeResult::Consumed { .. } => {
                let age = now.signed_duration_since(attempt.timestamp);
                // Symmetric bound: a future-dated attempt (client clock
                // ahead of the server) is as stale as an old one.
                if age > self.window || age < -self.window {
                    Ok(FreshnessOutcome::Expired)
                } else {
                    Ok(FreshnessOutcome::Accepted)
                }
            }
        }
    }
}
