//! Data provider retry configuration.

use serde::Deserialize;

/// Exponential backoff settings for data provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Initial delay in milliseconds before the first retry.
    pub initial_delay_millis: u64,
    /// Upper bound on a single delay, in seconds.
    pub max_delay_secs: u64,
    /// Maximum number of retries.
    pub max_attempts: usize,
    /// Backoff multiplier.
    pub backoff_multiplier: u64,
    /// Whether to add jitter to delays.
    pub jitter: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            initial_delay_millis: 100,
            max_delay_secs: 30,
            max_attempts: 5,
            backoff_multiplier: 2,
            jitter: false,
        }
    }
}
