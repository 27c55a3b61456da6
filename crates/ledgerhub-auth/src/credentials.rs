//! Credential store trait consumed by the authenticator.

use async_trait::async_trait;

use ledgerhub_core::AppResult;
use ledgerhub_entity::auth::StoredSecret;

/// Supplies, per username, the stored secret material needed to recompute
/// the expected hash.
///
/// Persistence, caching, and invalidation are the implementor's concern;
/// the auth core treats lookups as opaque, possibly-latent calls and owns
/// no retry policy. An absent username must be reported as `Ok(None)`, not
/// as an error — the authenticator folds it into the uniform failure path.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up the stored secret for a username (case-sensitive).
    async fn lookup_secret(&self, username: &str) -> AppResult<Option<StoredSecret>>;
}
