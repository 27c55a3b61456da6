//! Integration tests for the challenge/response authentication flow.

use std::sync::Arc;

use chrono::{Duration, Utc};

use ledgerhub_auth::{
    AuthDecision, Authenticator, ChallengeIssuer, HashVerifier, MemoryChallengeStore,
    MemoryCredentialStore,
};
use ledgerhub_core::config::auth::AuthConfig;
use ledgerhub_entity::auth::{AuthAttempt, StoredSecret};

struct TestAuth {
    issuer: ChallengeIssuer,
    authenticator: Authenticator,
    credentials: MemoryCredentialStore,
}

impl TestAuth {
    fn new() -> Self {
        let config = AuthConfig::default();
        let challenges = Arc::new(MemoryChallengeStore::new());
        let credentials = MemoryCredentialStore::new();
        Self {
            issuer: ChallengeIssuer::new(challenges.clone(), &config),
            authenticator: Authenticator::new(
                challenges,
                Arc::new(credentials.clone()),
                &config,
            ),
            credentials,
        }
    }

    async fn create_test_user(&self, username: &str, secret: &str) {
        self.credentials
            .insert(username, StoredSecret::from(secret))
            .await;
    }

    /// Issues a salt and builds the attempt a correct client would send.
    async fn valid_attempt(&self, username: &str, secret: &str) -> AuthAttempt {
        let salt = self.issuer.issue(username).await.unwrap();
        let hash = HashVerifier::compute_hash(&StoredSecret::from(secret), &salt);
        AuthAttempt::new(username, salt, hash)
    }
}

#[tokio::test]
async fn test_valid_attempt_authenticates() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let attempt = app.valid_attempt("alice", "ledger-secret").await;
    let decision = app.authenticator.authenticate(&attempt).await.unwrap();

    assert_eq!(
        decision,
        AuthDecision::Authenticated {
            username: "alice".to_string()
        }
    );
}

#[tokio::test]
async fn test_identical_attempt_rejected_on_replay() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let attempt = app.valid_attempt("alice", "ledger-secret").await;
    assert!(
        app.authenticator
            .authenticate(&attempt)
            .await
            .unwrap()
            .is_authenticated()
    );

    // Byte-identical resubmission, correct hash and all.
    let replay = app.authenticator.authenticate(&attempt).await.unwrap();
    assert_eq!(replay, AuthDecision::Failed);
}

#[tokio::test]
async fn test_wrong_secret_fails() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let attempt = app.valid_attempt("alice", "wrong-guess").await;
    let decision = app.authenticator.authenticate(&attempt).await.unwrap();

    assert_eq!(decision, AuthDecision::Failed);
}

#[tokio::test]
async fn test_unknown_user_indistinguishable_from_wrong_secret() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let known_wrong = app.valid_attempt("alice", "wrong-guess").await;
    let unknown = app.valid_attempt("mallory", "wrong-guess").await;

    let known_result = app.authenticator.authenticate(&known_wrong).await.unwrap();
    let unknown_result = app.authenticator.authenticate(&unknown).await.unwrap();

    assert_eq!(known_result, unknown_result);
    assert_eq!(unknown_result, AuthDecision::Failed);
}

#[tokio::test]
async fn test_stale_attempt_fails_despite_correct_hash() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let mut attempt = app.valid_attempt("alice", "ledger-secret").await;
    attempt.timestamp = Utc::now() - Duration::seconds(3600);

    let decision = app.authenticator.authenticate(&attempt).await.unwrap();
    assert_eq!(decision, AuthDecision::Failed);
}

#[tokio::test]
async fn test_failed_attempt_still_consumes_the_salt() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let salt = app.issuer.issue("alice").await.unwrap();
    let bad_hash = HashVerifier::compute_hash(&StoredSecret::from("wrong"), &salt);
    let bad = AuthAttempt::new("alice", salt.clone(), bad_hash);
    assert_eq!(
        app.authenticator.authenticate(&bad).await.unwrap(),
        AuthDecision::Failed
    );

    // The failed attempt spent the challenge: the correct hash is now a
    // replay.
    let good_hash = HashVerifier::compute_hash(&StoredSecret::from("ledger-secret"), &salt);
    let good = AuthAttempt::new("alice", salt, good_hash);
    assert_eq!(
        app.authenticator.authenticate(&good).await.unwrap(),
        AuthDecision::Failed
    );
}

#[tokio::test]
async fn test_concurrent_duplicate_attempts_admit_at_most_one() {
    let app = TestAuth::new();
    app.create_test_user("alice", "ledger-secret").await;

    let attempt = app.valid_attempt("alice", "ledger-secret").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let authenticator = app.authenticator.clone();
        let attempt = attempt.clone();
        handles.push(tokio::spawn(async move {
            authenticator.authenticate(&attempt).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().is_authenticated() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_distinct_users_authenticate_independently() {
    let app = TestAuth::new();
    app.create_test_user("alice", "alice-secret").await;
    app.create_test_user("bob", "bob-secret").await;

    let alice = app.valid_attempt("alice", "alice-secret").await;
    let bob = app.valid_attempt("bob", "bob-secret").await;

    assert!(
        app.authenticator
            .authenticate(&alice)
            .await
            .unwrap()
            .is_authenticated()
    );
    assert!(
        app.authenticator
            .authenticate(&bob)
            .await
            .unwrap()
            .is_authenticated()
    );
}
