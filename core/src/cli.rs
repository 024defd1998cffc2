//! # Command Line Interface
//!
//! This module defines the command line interface of the `spv-relay` binary.
//! `Clap` is used for easy generation of help messages and handling
//! arguments.
//!
//! Hashes and Merkle siblings are given in internal byte order, the order of
//! the proof wire format. Output is JSON.

use crate::relay::EpochRelayState;
use crate::utils::{self, decode_hash, decode_hex, format_difficulty};
use crate::verifier::verify_proof;
use bitcoin::Network;
use clap::{Parser, Subcommand};
use crypto_bigint::U256;
use serde_json::json;
use spv_config::SpvConfig;
use spv_errors::{display_hash, SpvError};
use spv_lib::common::constants::NetworkConstants;
use spv_lib::header::BlockHeader;
use spv_lib::header_chain::{validate_header_chain, ValidatedChain};
use spv_lib::merkle::verify_merkle_inclusion;
use spv_lib::proof::{parse_merkle_proof, SpvProof};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::Level;

/// Bitcoin SPV relay tooling.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// TOML formatted configuration file.
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,
    /// Network to use instead of the configured one.
    #[arg(short, long, global = true)]
    pub network: Option<Network>,
    /// Verbosity level, ranging from 0 (none) to 5 (highest)
    #[arg(short, long, default_value_t = 3, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decode an 80-byte header.
    Header {
        /// Serialized header in hex.
        header: String,
    },
    /// Check a Merkle inclusion proof.
    Merkle {
        /// Transaction hash.
        #[arg(long)]
        tx_hash: String,
        /// Merkle root the proof should lead to.
        #[arg(long)]
        root: String,
        /// Concatenated siblings, deepest first. Empty for a single
        /// transaction block.
        #[arg(long, default_value = "")]
        proof: String,
        /// Position of the transaction in its block.
        #[arg(long)]
        index: u64,
    },
    /// Validate a header chain against two epoch difficulties.
    Chain {
        /// Concatenated headers in hex.
        #[arg(long)]
        headers: String,
        #[arg(long)]
        previous_difficulty: u64,
        #[arg(long)]
        current_difficulty: u64,
    },
    /// Bootstrap an in-memory relay and verify an SPV proof against it.
    Verify {
        /// Header of the first block of the genesis epoch.
        #[arg(long)]
        genesis_header: String,
        #[arg(long)]
        genesis_height: u32,
        /// Proof length to use instead of the configured one.
        #[arg(long)]
        proof_length: Option<usize>,
        /// Retarget header chains to apply after genesis, in order.
        #[arg(long)]
        retarget: Vec<String>,
        /// Identity submitting the retargets. Defaults to governance.
        #[arg(long)]
        submitter: Option<String>,
        /// JSON encoded SPV proof file.
        proof: PathBuf,
    },
}

/// Parse all the command line arguments.
fn parse() -> Result<Args, SpvError> {
    parse_from(env::args())
}

/// Parse given iterator. This is good for isolated environments, like tests.
pub fn parse_from<I, T>(itr: I) -> Result<Args, SpvError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(itr) {
        Ok(c) => Ok(c),
        Err(e) => Err(SpvError::ConfigError(e.to_string())),
    }
}

/// Gets configuration from CLI, for binaries. If there are any errors, prints
/// error and exits the program.
///
/// Steps:
///
/// 1. Get CLI arguments
/// 2. Initialize logger
/// 3. Get configuration, from environment variables, the configuration file
///    or defaults, in that order
pub fn get_configuration_from_cli() -> (SpvConfig, Args) {
    let args = match parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    let level_filter = match args.verbose {
        0 => None,
        other => Some(LevelFilter::from_level(
            Level::from_str(&other.to_string()).unwrap_or(Level::INFO),
        )),
    };

    if let Err(e) = utils::initialize_logger(level_filter) {
        eprintln!("{e}");
        exit(1);
    }

    let mut config = match get_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Can't read configuration: {e}");
            exit(1);
        }
    };

    if let Some(network) = args.network {
        config.relay.network = network;
    }

    (config, args)
}

fn get_configuration(args: &Args) -> Result<SpvConfig, SpvError> {
    match SpvConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "All the environment variables are set. Using them instead of configuration file..."
            );
            return Ok(config);
        }
        Err(SpvError::EnvVarNotSet(_)) => {
            tracing::debug!("Not all the config overwrite environment variables are set");
        }
        Err(e) => return Err(e),
    }

    match &args.config_file {
        Some(config_file) => SpvConfig::try_parse_file(config_file.clone()),
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Ok(SpvConfig::default())
        }
    }
}

/// Runs a subcommand and returns its JSON report.
pub fn run(config: &SpvConfig, command: &Command) -> Result<serde_json::Value, SpvError> {
    let constants = NetworkConstants::for_network(config.relay.network);

    match command {
        Command::Header { header } => {
            let header = BlockHeader::deserialize(&decode_hex(header)?)?;
            Ok(json!({
                "hash": display_hash(&header.compute_block_hash()),
                "prev_block_hash": display_hash(&header.prev_block_hash),
                "merkle_root": display_hash(&header.merkle_root),
                "version": header.version,
                "time": header.time,
                "bits": format!("{:#010x}", header.bits),
                "target": format!("0x{}", header.target()),
                "difficulty": format_difficulty(&header.difficulty(&constants)),
                "valid_work": header.has_valid_work(),
            }))
        }
        Command::Merkle {
            tx_hash,
            root,
            proof,
            index,
        } => {
            let siblings = parse_merkle_proof(&decode_hex(proof)?)?;
            verify_merkle_inclusion(&decode_hash(tx_hash)?, &decode_hash(root)?, &siblings, *index)?;
            Ok(json!({ "included": true, "depth": siblings.len() }))
        }
        Command::Chain {
            headers,
            previous_difficulty,
            current_difficulty,
        } => {
            let headers = spv_lib::header::deserialize_chain(&decode_hex(headers)?)?;
            let validated = validate_header_chain(
                &headers,
                &U256::from(*previous_difficulty),
                &U256::from(*current_difficulty),
                &constants,
            )?;
            Ok(chain_report(&validated))
        }
        Command::Verify {
            genesis_header,
            genesis_height,
            proof_length,
            retarget,
            submitter,
            proof,
        } => {
            let proof = read_proof(proof)?;
            let governance = config.relay.governance.as_str();
            let submitter = submitter.as_deref().unwrap_or(governance);

            let mut relay = EpochRelayState::from_config(&config.relay);
            relay.genesis(
                governance,
                &decode_hex(genesis_header)?,
                *genesis_height,
                proof_length.unwrap_or(config.relay.proof_length),
            )?;
            for headers in retarget {
                relay.retarget(submitter, &decode_hex(headers)?)?;
            }

            let validated = verify_proof(&relay, &proof, &config.verifier)?;
            let (current, previous) = relay.get_current_and_prev_epoch_difficulty();

            let mut report = chain_report(&validated);
            report["tx_hash"] = json!(display_hash(&proof.tx_hash));
            report["current_epoch_difficulty"] = json!(format_difficulty(&current));
            report["previous_epoch_difficulty"] = json!(format_difficulty(&previous));
            Ok(report)
        }
    }
}

fn read_proof(path: &Path) -> Result<SpvProof, SpvError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| SpvError::ConfigError(e.to_string()))?;
    serde_json::from_str(&contents)
        .map_err(|e| SpvError::ConfigError(format!("Invalid proof file {path:?}: {e}")))
}

fn chain_report(validated: &ValidatedChain) -> serde_json::Value {
    json!({
        "first_hash": display_hash(&validated.first_hash),
        "last_hash": display_hash(&validated.last_hash),
        "headers": validated.header_count,
        "accumulated_difficulty": format_difficulty(&validated.accumulated_difficulty),
    })
}
