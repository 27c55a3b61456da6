//! # ledgerhub-auth
//!
//! The authentication and authorization boundary of LedgerHub.
//!
//! ## Modules
//!
//! - `challenge` — salt issuance, the pending-challenge store, replay
//!   enforcement, and stale-challenge sweeping
//! - `verifier` — salted-hash verification with constant-time comparison
//! - `authenticator` — orchestration of the challenge/response protocol
//! - `access` — access right repository trait and deny-by-default evaluator
//! - `credentials` — credential store trait consumed by the authenticator
//! - `memory` — in-memory collaborator implementations for single-node
//!   deployments and tests

pub mod access;
pub mod authenticator;
pub mod challenge;
pub mod credentials;
pub mod memory;
pub mod verifier;

pub use access::{AccessEvaluator, AccessRightRepository};
pub use authenticator::{AuthDecision, Authenticator};
pub use challenge::{
    ChallengeIssuer, ChallengeStore, ChallengeSweeper, FreshnessOutcome, MemoryChallengeStore,
    ReplayEnforcer,
};
pub use credentials::CredentialStore;
pub use memory::{MemoryAccessRightRepository, MemoryCredentialStore};
pub use verifier::HashVerifier;
