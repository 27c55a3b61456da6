//! Integration tests for access right evaluation.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ledgerhub_auth::{AccessEvaluator, AccessRightRepository, MemoryAccessRightRepository};
use ledgerhub_core::error::ErrorKind;
use ledgerhub_core::{AppError, AppResult};
use ledgerhub_entity::permission::{AccessRight, Action};

#[tokio::test]
async fn test_granted_pair_allows_only_that_pair() {
    let repo = Arc::new(MemoryAccessRightRepository::new());
    let evaluator = AccessEvaluator::new(repo.clone());
    let alice = Uuid::new_v4();

    repo.grant(alice, AccessRight::new("ledger", Action::Read).unwrap())
        .await
        .unwrap();

    assert!(evaluator.check(alice, "ledger", Action::Read).await);
    assert!(!evaluator.check(alice, "ledger", Action::Delete).await);
    assert!(!evaluator.check(alice, "invoice", Action::Read).await);
}

#[tokio::test]
async fn test_revoking_only_grant_flips_to_deny() {
    let repo = Arc::new(MemoryAccessRightRepository::new());
    let evaluator = AccessEvaluator::new(repo.clone());
    let alice = Uuid::new_v4();

    let right = repo
        .grant(alice, AccessRight::new("ledger", Action::Modify).unwrap())
        .await
        .unwrap();
    assert!(evaluator.check(alice, "ledger", Action::Modify).await);

    repo.revoke(alice, right.id).await.unwrap();
    assert!(!evaluator.check(alice, "ledger", Action::Modify).await);
}

#[tokio::test]
async fn test_unknown_principal_denied() {
    let evaluator = AccessEvaluator::new(Arc::new(MemoryAccessRightRepository::new()));
    assert!(!evaluator.check(Uuid::new_v4(), "ledger", Action::Read).await);
}

#[tokio::test]
async fn test_require_surfaces_authorization_error() {
    let repo = Arc::new(MemoryAccessRightRepository::new());
    let evaluator = AccessEvaluator::new(repo.clone());
    let alice = Uuid::new_v4();

    repo.grant(alice, AccessRight::new("ledger", Action::Read).unwrap())
        .await
        .unwrap();

    assert!(evaluator.require(alice, "ledger", Action::Read).await.is_ok());

    let denied = evaluator
        .require(alice, "ledger", Action::Delete)
        .await
        .unwrap_err();
    assert_eq!(denied.kind, ErrorKind::Authorization);
}

/// Repository whose lookups always fail, standing in for an unreachable
/// collaborator store.
struct UnreachableRepository;

#[async_trait]
impl AccessRightRepository for UnreachableRepository {
    async fn rights_of(&self, _principal: Uuid) -> AppResult<Vec<AccessRight>> {
        Err(AppError::unavailable("rights store unreachable"))
    }

    async fn grant(&self, _principal: Uuid, _right: AccessRight) -> AppResult<AccessRight> {
        Err(AppError::unavailable("rights store unreachable"))
    }

    async fn revoke(&self, _principal: Uuid, _right_id: Uuid) -> AppResult<bool> {
        Err(AppError::unavailable("rights store unreachable"))
    }
}

#[tokio::test]
async fn test_repository_failure_is_a_deny_not_an_error() {
    let evaluator = AccessEvaluator::new(Arc::new(UnreachableRepository));
    let alice = Uuid::new_v4();

    assert!(!evaluator.check(alice, "ledger", Action::Read).await);

    let denied = evaluator
        .require(alice, "ledger", Action::Read)
        .await
        .unwrap_err();
    assert_eq!(denied.kind, ErrorKind::Authorization);
}
