//! Stored secret material supplied by the credential store.

use serde::{Deserialize, Serialize};

/// Opaque secret material for one account.
///
/// The bytes never appear in `Debug` output so secrets cannot leak
/// through tracing fields or panic messages.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoredSecret(Vec<u8>);

impl StoredSecret {
    /// Wraps raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Exposes the secret bytes to the hash verifier.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for StoredSecret {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StoredSecret").field(&"<redacted>").finish()
    }
}
