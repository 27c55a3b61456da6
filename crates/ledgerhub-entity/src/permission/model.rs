//! Access right entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledgerhub_core::AppError;

use super::action::Action;

/// A permission grant: one `(resource_type, action)` pair.
///
/// Rights are owned by principals many-to-many; the right itself carries
/// no back-reference to its holders. The `id` is a storage-stable
/// surrogate key, assigned at creation and immutable afterwards. Rights
/// are never mutated in place — a change is a new grant plus a
/// revocation of the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRight {
    /// Unique right identifier.
    pub id: Uuid,
    /// Resource category the right applies to (non-empty label, e.g.
    /// `"ledger"`, `"invoice"`, `"report"`).
    pub resource_type: String,
    /// The permitted operation.
    pub action: Action,
}

impl AccessRight {
    /// Creates a new right with a fresh surrogate key.
    ///
    /// Rejects an empty or blank resource type.
    pub fn new(resource_type: impl Into<String>, action: Action) -> Result<Self, AppError> {
        let resource_type = resource_type.into();
        if resource_type.trim().is_empty() {
            return Err(AppError::validation("Resource type must not be empty"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            resource_type,
            action,
        })
    }

    /// Whether this right grants exactly the given `(resource_type, action)`.
    pub fn grants(&self, resource_type: &str, action: Action) -> bool {
        self.resource_type == resource_type && self.action == action
    }
}
