//! Pending challenge state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key identifying one issued challenge: the `(username, salt)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeKey {
    /// The account the salt was issued for.
    pub username: String,
    /// The issued salt.
    pub salt: String,
}

impl ChallengeKey {
    /// Creates a challenge key.
    pub fn new(username: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            salt: salt.into(),
        }
    }
}

/// Lifecycle state of an issued challenge.
///
/// Two states only: `Pending` after issuance, `Consumed` after any
/// evaluation attempt (success or failure). `Consumed` is terminal — a
/// challenge can never return to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeState {
    /// Issued and not yet presented.
    Pending {
        /// When the salt was issued.
        issued_at: DateTime<Utc>,
    },
    /// Presented at least once; the marker is retained so a replay is
    /// distinguishable from a never-issued salt.
    Consumed {
        /// When the challenge was consumed.
        consumed_at: DateTime<Utc>,
    },
}

impl ChallengeState {
    /// Whether this challenge is still pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The timestamp relevant for sweeping: issuance for pending
    /// challenges, consumption for consumed markers.
    pub fn as_of(&self) -> DateTime<Utc> {
        match self {
            Self::Pending { issued_at } => *issued_at,
            Self::Consumed { consumed_at } => *consumed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        let now = Utc::now();
        assert!(ChallengeState::Pending { issued_at: now }.is_pending());
        assert!(!ChallengeState::Consumed { consumed_at: now }.is_pending());
    }
}
