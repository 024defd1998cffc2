//! Proof verification configuration.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Exact number of headers a proof must carry, the confirming block
    /// included.
    pub required_confirmations: u32,
    /// Whether the summed header difficulty must reach
    /// `required_confirmations` times the difficulty of the proof's epoch.
    pub enforce_accumulated_difficulty: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            required_confirmations: 6,
            enforce_accumulated_difficulty: true,
        }
    }
}
