//! Salted-hash verification with constant-time comparison.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use ledgerhub_entity::auth::{AuthAttempt, StoredSecret};

/// Secret used when the username is unknown, so the absent-secret path
/// performs the same digest work as a real verification.
const DUMMY_SECRET: &[u8] = b"ledgerhub-unknown-account";

/// Verifies a client's hash attempt against the stored secret.
///
/// The expected digest is `SHA-256(secret || ':' || salt)`, carried
/// base64url-encoded without padding. Comparison is constant-time so the
/// verification latency does not depend on the position of the first
/// mismatched byte.
#[derive(Debug, Clone, Default)]
pub struct HashVerifier;

impl HashVerifier {
    /// Creates a new verifier instance.
    pub fn new() -> Self {
        Self
    }

    /// Computes the digest a correct client would send for this secret
    /// and salt.
    ///
    /// This is the reference implementation of the client-side
    /// computation; collaborators and tests use it to produce valid
    /// attempts.
    pub fn compute_hash(secret: &StoredSecret, salt: &str) -> String {
        URL_SAFE_NO_PAD.encode(digest(secret.as_bytes(), salt))
    }

    /// Checks the attempt's claimed hash against the stored secret.
    ///
    /// Returns `false` — never an error — on mismatch, on an undecodable
    /// claim, or when `secret` is `None`. The unknown-username path runs
    /// the same digest and comparison as a wrong-password attempt so the
    /// two are externally indistinguishable.
    pub fn verify(&self, attempt: &AuthAttempt, secret: Option<&StoredSecret>) -> bool {
        let expected = match secret {
            Some(s) => digest(s.as_bytes(), &attempt.salt),
            None => digest(DUMMY_SECRET, &attempt.salt),
        };

        let claimed = URL_SAFE_NO_PAD
            .decode(&attempt.hash_attempt)
            .unwrap_or_default();
        if claimed.len() != expected.len() {
            // Digest length is fixed by the encoding, not secret-dependent.
            return false;
        }

        let matches = bool::from(expected.as_slice().ct_eq(claimed.as_slice()));
        matches && secret.is_some()
    }
}

fn digest(secret: &[u8], salt: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(b":");
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}
