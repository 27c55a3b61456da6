//! Authentication protocol configuration.

use serde::{Deserialize, Serialize};

/// Challenge/response authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Number of random bytes in an issued salt.
    #[serde(default = "default_salt_length")]
    pub salt_length_bytes: usize,
    /// Maximum age (in seconds) of an attempt timestamp before it is
    /// rejected as expired. Also bounds forward clock drift.
    #[serde(default = "default_freshness_window")]
    pub freshness_window_seconds: u64,
    /// How long (in seconds) issued and consumed challenges are retained
    /// before the sweeper discards them. Must not be shorter than the
    /// freshness window.
    #[serde(default = "default_challenge_ttl")]
    pub challenge_ttl_seconds: u64,
    /// Interval (in seconds) between challenge sweep cycles.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            salt_length_bytes: default_salt_length(),
            freshness_window_seconds: default_freshness_window(),
            challenge_ttl_seconds: default_challenge_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_salt_length() -> usize {
    32
}

fn default_freshness_window() -> u64 {
    120
}

fn default_challenge_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    300
}
