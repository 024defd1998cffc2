//! Sliding-window relay configuration.

use serde::Deserialize;

/// Default number of recent headers kept by the sliding-window relay.
pub const DEFAULT_WINDOW_CAPACITY: usize = 2016;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Size of the ring buffer. Heights older than `tip - capacity + 1` can no
    /// longer be proven.
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}
