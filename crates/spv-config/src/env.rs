//! # Environment Variable Support For [`SpvConfig`]
//!
//! Every section can be supplied through `SPV_*` variables. All of them must
//! be set, except `SPV_AUTHORIZED_SUBMITTERS`, which defaults to an empty
//! list.

use crate::{ProviderConfig, RelayConfig, SpvConfig, VerifierConfig, WindowConfig};
use bitcoin::Network;
use spv_errors::SpvError;
use std::str::FromStr;

pub fn read_string_from_env(name: &'static str) -> Result<String, SpvError> {
    Ok(std::env::var(name)?)
}

pub fn read_string_from_env_then_parse<T: FromStr>(name: &'static str) -> Result<T, SpvError>
where
    T::Err: std::fmt::Display,
{
    read_string_from_env(name)?
        .parse::<T>()
        .map_err(|e| SpvError::EnvVarMalformed(name, e.to_string()))
}

impl SpvConfig {
    pub fn from_env() -> Result<Self, SpvError> {
        let authorized_submitters = match std::env::var("SPV_AUTHORIZED_SUBMITTERS") {
            Ok(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => Vec::new(),
        };

        let relay = RelayConfig {
            network: read_string_from_env_then_parse::<Network>("SPV_NETWORK")?,
            proof_length: read_string_from_env_then_parse("SPV_PROOF_LENGTH")?,
            authorization_required: read_string_from_env_then_parse(
                "SPV_AUTHORIZATION_REQUIRED",
            )?,
            governance: read_string_from_env("SPV_GOVERNANCE")?,
            authorized_submitters,
        };

        let window = WindowConfig {
            capacity: read_string_from_env_then_parse("SPV_WINDOW_CAPACITY")?,
        };

        let verifier = VerifierConfig {
            required_confirmations: read_string_from_env_then_parse(
                "SPV_REQUIRED_CONFIRMATIONS",
            )?,
            enforce_accumulated_difficulty: read_string_from_env_then_parse(
                "SPV_ENFORCE_ACCUMULATED_DIFFICULTY",
            )?,
        };

        let config = SpvConfig {
            relay,
            window,
            verifier,
            provider: ProviderConfig::default(),
        };

        tracing::debug!("Configuration read from environment: {:?}", config);

        Ok(config)
    }
}
