//! Challenge issuance, replay enforcement, and sweeping.

pub mod enforcer;
pub mod issuer;
pub mod memory;
pub mod store;
pub mod sweeper;

pub use enforcer::{FreshnessOutcome, ReplayEnforcer};
pub use issuer::ChallengeIssuer;
pub use memory::MemoryChallengeStore;
pub use store::{ChallengeStore, ConsumeResult};
pub use sweeper::ChallengeSweeper;
