//! Authentication protocol entities.

pub mod attempt;
pub mod challenge;
pub mod secret;

pub use attempt::AuthAttempt;
pub use challenge::{ChallengeKey, ChallengeState};
pub use secret::StoredSecret;
