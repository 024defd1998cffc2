//! # SPV Config
//!
//! Configuration options for relay deployments and the proof tooling.
//!
//! ## Configuration File
//!
//! Configuration options can be read from a TOML file, one table per
//! section. Every field has a default, so a file only needs the values it
//! changes:
//!
//! ```toml
//! [relay]
//! network = "regtest"
//! proof_length = 4
//!
//! [verifier]
//! required_confirmations = 6
//! ```

use serde::Deserialize;
use spv_errors::SpvError;
use std::{fs::File, io::Read, path::PathBuf};

pub mod env;
pub mod provider;
pub mod relay;
pub mod verifier;
pub mod window;

pub use provider::ProviderConfig;
pub use relay::{RelayConfig, DEFAULT_PROOF_LENGTH};
pub use verifier::VerifierConfig;
pub use window::{WindowConfig, DEFAULT_WINDOW_CAPACITY};

/// Configuration options for any relay target (tests, binaries etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpvConfig {
    pub relay: RelayConfig,
    pub window: WindowConfig,
    pub verifier: VerifierConfig,
    pub provider: ProviderConfig,
}

impl SpvConfig {
    /// Read contents of a TOML file and generate a `SpvConfig`.
    pub fn try_parse_file(path: PathBuf) -> Result<Self, SpvError> {
        let mut contents = String::new();

        let mut file = match File::open(path.clone()) {
            Ok(f) => f,
            Err(e) => return Err(SpvError::ConfigError(e.to_string())),
        };

        if let Err(e) = file.read_to_string(&mut contents) {
            return Err(SpvError::ConfigError(e.to_string()));
        }

        tracing::trace!("Using configuration file: {:?}", path);

        SpvConfig::try_parse_from(contents)
    }

    /// Try to parse a `SpvConfig` from given TOML formatted string.
    pub fn try_parse_from(input: String) -> Result<Self, SpvError> {
        match toml::from_str::<SpvConfig>(&input) {
            Ok(c) => Ok(c),
            Err(e) => Err(SpvError::ConfigError(e.to_string())),
        }
    }
}
