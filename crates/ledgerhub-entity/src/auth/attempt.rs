//! Wire-level authentication attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's credential claim for one challenge/response round.
///
/// An attempt is transient: it is constructed per request and discarded
/// after evaluation. Its `(username, salt)` pair is single-use — once
/// evaluated, successfully or not, the same pair is never accepted again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAttempt {
    /// Account identifier, matched case-sensitively against the
    /// credential store.
    pub username: String,
    /// The salt previously issued for this attempt.
    pub salt: String,
    /// Client-computed digest of (secret, salt), base64url-encoded.
    /// Opaque to everything except the hash verifier.
    pub hash_attempt: String,
    /// Attempt creation time, used only for freshness checking.
    pub timestamp: DateTime<Utc>,
}

impl AuthAttempt {
    /// Creates a new attempt stamped with the current time.
    pub fn new(
        username: impl Into<String>,
        salt: impl Into<String>,
        hash_attempt: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            salt: salt.into(),
            hash_attempt: hash_attempt.into(),
            timestamp: Utc::now(),
        }
    }
}
