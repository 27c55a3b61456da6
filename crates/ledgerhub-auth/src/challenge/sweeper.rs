//! Periodic cleanup of stale challenges.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info};

use ledgerhub_core::AppResult;
use ledgerhub_core::config::auth::AuthConfig;

use super::store::ChallengeStore;

/// Handles periodic removal of stale pending challenges and consumed
/// markers.
///
/// Consumed markers must outlive the freshness window so a replay inside
/// the window always finds the marker; the TTL enforces that ordering at
/// construction time by clamping to the window.
#[derive(Clone)]
pub struct ChallengeSweeper {
    /// Challenge store to sweep.
    store: Arc<dyn ChallengeStore>,
    /// Retention period for challenge entries.
    ttl: Duration,
    /// Delay between sweep cycles.
    interval: std::time::Duration,
}

impl std::fmt::Debug for ChallengeSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeSweeper")
            .field("ttl", &self.ttl)
            .field("interval", &self.interval)
            .finish()
    }
}

impl ChallengeSweeper {
    /// Creates a new sweeper.
    pub fn new(store: Arc<dyn ChallengeStore>, config: &AuthConfig) -> Self {
        let ttl = config
            .challenge_ttl_seconds
            .max(config.freshness_window_seconds);
        Self {
            store,
            ttl: Duration::seconds(ttl as i64),
            interval: std::time::Duration::from_secs(config.sweep_interval_seconds),
        }
    }

    /// Runs one sweep cycle. Returns the number of entries removed.
    pub async fn run_sweep(&self) -> AppResult<u32> {
        let removed = self.store.sweep(Utc::now(), self.ttl).await?;
        if removed > 0 {
            info!(removed, "Challenge sweep cycle complete");
        }
        Ok(removed)
    }

    /// Runs sweep cycles forever at the configured interval.
    ///
    /// Intended to be spawned as a background task by the hosting service.
    pub async fn run_periodic(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if let Err(e) = self.run_sweep().await {
                error!(error = %e, "Challenge sweep failed");
            }
        }
    }
}
