//! Access right repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use ledgerhub_core::AppResult;
use ledgerhub_entity::permission::AccessRight;

/// Supplies and administers the access rights held by principals.
///
/// The evaluator treats `rights_of` as a pure lookup; persistence,
/// caching, and invalidation are the implementor's concern. The
/// administrative operations maintain the de-duplication invariant: no
/// principal holds two rights with the same `(resource_type, action)`.
#[async_trait]
pub trait AccessRightRepository: Send + Sync {
    /// Returns the rights granted to a principal.
    async fn rights_of(&self, principal: Uuid) -> AppResult<Vec<AccessRight>>;

    /// Grants a right to a principal.
    ///
    /// Granting an already-held `(resource_type, action)` pair is
    /// idempotent and returns the existing right unchanged.
    async fn grant(&self, principal: Uuid, right: AccessRight) -> AppResult<AccessRight>;

    /// Revokes a right by its id. Returns `true` if a right was removed.
    async fn revoke(&self, principal: Uuid, right_id: Uuid) -> AppResult<bool>;
}
