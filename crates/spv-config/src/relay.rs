//! Epoch-difficulty relay configuration.

use bitcoin::Network;
use serde::Deserialize;

/// Default number of headers on each side of a retarget boundary.
pub const DEFAULT_PROOF_LENGTH: usize = 20;

/// Configuration of an epoch-difficulty relay deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Network whose headers the relay tracks.
    pub network: Network,
    /// Proof length used at genesis.
    pub proof_length: usize,
    /// Whether only authorized submitters may retarget.
    pub authorization_required: bool,
    /// Identity allowed to run governance operations.
    pub governance: String,
    /// Submitters authorized at startup.
    pub authorized_submitters: Vec<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            network: Network::Bitcoin,
            proof_length: DEFAULT_PROOF_LENGTH,
            authorization_required: false,
            governance: "governance".to_string(),
            authorized_submitters: Vec::new(),
        }
    }
}
