//! Pending-challenge store trait.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use ledgerhub_core::AppResult;
use ledgerhub_entity::auth::ChallengeKey;

/// Result of an atomic check-and-consume on one challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeResult {
    /// The challenge was pending and is now consumed; carries the
    /// issuance time for diagnostics.
    Consumed {
        /// When the salt was issued.
        issued_at: DateTime<Utc>,
    },
    /// The challenge was already consumed by an earlier attempt.
    AlreadyConsumed,
    /// No challenge with this key was ever registered (or it has been
    /// swept).
    Unknown,
}

/// Shared store of issued challenges keyed by `(username, salt)`.
///
/// This is the only shared mutable state in the auth core. Implementations
/// must make [`consume`](ChallengeStore::consume) atomic: the lookup and
/// the `Pending` → `Consumed` transition happen under one lock, so two
/// concurrent attempts with the same salt cannot both observe `Pending`.
#[async_trait]
pub trait ChallengeStore: Send + Sync {
    /// Registers a freshly issued challenge as pending.
    ///
    /// Fails with a conflict if the key already exists in either state —
    /// a consumed challenge must never return to pending.
    async fn register(&self, key: ChallengeKey, issued_at: DateTime<Utc>) -> AppResult<()>;

    /// Atomically consumes the challenge, whatever the subsequent
    /// evaluation outcome.
    async fn consume(&self, key: &ChallengeKey, now: DateTime<Utc>) -> AppResult<ConsumeResult>;

    /// Discards entries older than `ttl` (pending and consumed alike).
    /// Returns the number of entries removed.
    async fn sweep(&self, now: DateTime<Utc>, ttl: Duration) -> AppResult<u32>;
}
