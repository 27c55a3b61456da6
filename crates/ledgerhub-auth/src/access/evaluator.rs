//! Deny-by-default access right evaluation.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use ledgerhub_core::{AppError, AppResult};
use ledgerhub_entity::permission::{AccessRight, Action};

use crate::access::repository::AccessRightRepository;

/// Evaluates requested `(resource_type, action)` pairs against a
/// principal's granted rights.
///
/// Exact-match only: no wildcards, no hierarchy inference. Whatever
/// implication policy exists (an `administer` grant standing in for the
/// others, say) must have been expanded into explicit rights at grant
/// time.
#[derive(Clone)]
pub struct AccessEvaluator {
    /// Rights collaborator.
    repo: Arc<dyn AccessRightRepository>,
}

impl std::fmt::Debug for AccessEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessEvaluator").finish()
    }
}

impl AccessEvaluator {
    /// Creates an evaluator over the given repository.
    pub fn new(repo: Arc<dyn AccessRightRepository>) -> Self {
        Self { repo }
    }

    /// True iff some right grants exactly `(resource_type, action)`.
    ///
    /// Pure function of its inputs; the absence of a match is a definite
    /// `false`, not an error.
    pub fn is_allowed(rights: &[AccessRight], resource_type: &str, action: Action) -> bool {
        rights
            .iter()
            .any(|right| right.grants(resource_type, action))
    }

    /// Looks up the principal's rights and evaluates the request.
    ///
    /// A repository failure is logged and evaluated as a deny — there is
    /// no error path out of access evaluation, and no ambient allow.
    pub async fn check(&self, principal: Uuid, resource_type: &str, action: Action) -> bool {
        match self.repo.rights_of(principal).await {
            Ok(rights) => Self::is_allowed(&rights, resource_type, action),
            Err(e) => {
                warn!(
                    principal = %principal,
                    resource_type = %resource_type,
                    action = %action,
                    error = %e,
                    "Rights lookup failed; denying"
                );
                false
            }
        }
    }

    /// Like [`check`](Self::check), but returns an authorization error on
    /// deny for call sites that want to propagate with `?`.
    pub async fn require(
        &self,
        principal: Uuid,
        resource_type: &str,
        action: Action,
    ) -> AppResult<()> {
        if self.check(principal, resource_type, action).await {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Principal lacks '{action}' on '{resource_type}'"
            )))
        }
    }
}
