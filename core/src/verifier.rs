//! # Proof Verification
//!
//! Checks an [`SpvProof`] against whatever relay backs the deployment. The
//! proof must carry exactly the configured number of headers, its transaction
//! must be included under the first header's Merkle root, and the header chain
//! must be valid for the relay's previous and current epoch difficulties.
//! Relays that record the chain itself also require the headers to be on it.
//!
//! A failed check rejects the proof as a whole.

use crypto_bigint::U256;
use spv_config::VerifierConfig;
use spv_errors::{ConsensusError, MalformedInputError, SpvError};
use spv_lib::header_chain::{validate_header_chain, ValidatedChain};
use spv_lib::merkle::verify_merkle_inclusion;
use spv_lib::proof::SpvProof;

use crate::relay::ChainAnchor;

/// Verifies `proof` against the difficulties known to `anchor`.
///
/// # Errors
///
/// - [`SpvError::ConfigError`] if zero confirmations are required
/// - [`MalformedInputError`] for undecodable fields or a header count other
///   than `required_confirmations`
/// - [`ConsensusError`] for a Merkle mismatch, an invalid chain or, when
///   enforced, insufficient accumulated difficulty
/// - Relay state errors raised by the anchor, including headers that are
///   not on its recorded chain
pub fn verify_proof<A: ChainAnchor + ?Sized>(
    anchor: &A,
    proof: &SpvProof,
    config: &VerifierConfig,
) -> Result<ValidatedChain, SpvError> {
    check_proof(anchor, proof, config)
        .inspect(|validated| {
            tracing::debug!(
                "Proof for {} accepted, {} headers starting at {}",
                spv_errors::display_hash(&proof.tx_hash),
                validated.header_count,
                spv_errors::display_hash(&validated.first_hash)
            );
        })
        .inspect_err(|e| {
            tracing::warn!(
                "Proof for {} rejected: {}",
                spv_errors::display_hash(&proof.tx_hash),
                e
            );
        })
}

fn check_proof<A: ChainAnchor + ?Sized>(
    anchor: &A,
    proof: &SpvProof,
    config: &VerifierConfig,
) -> Result<ValidatedChain, SpvError> {
    if config.required_confirmations == 0 {
        return Err(SpvError::ConfigError(
            "At least one confirmation must be required".to_string(),
        ));
    }

    let headers = proof.headers()?;
    let required = config.required_confirmations as usize;
    if headers.len() != required {
        return Err(MalformedInputError::InvalidHeaderLength {
            expected: required,
            actual: headers.len(),
        }
        .into());
    }

    let siblings = proof.siblings()?;
    verify_merkle_inclusion(
        &proof.tx_hash,
        &headers[0].merkle_root,
        &siblings,
        u64::from(proof.tx_index_in_block),
    )?;

    anchor.check_anchor(&headers)?;

    let (previous, current) = anchor.epoch_difficulties()?;
    let constants = anchor.network_constants();
    let validated = validate_header_chain(&headers, &previous, &current, &constants)?;

    if config.enforce_accumulated_difficulty {
        let required_difficulty = headers[0]
            .difficulty(&constants)
            .saturating_mul(&U256::from(config.required_confirmations));

        if validated.accumulated_difficulty < required_difficulty {
            return Err(ConsensusError::InsufficientAccumulatedDifficulty {
                required: required_difficulty,
                observed: validated.accumulated_difficulty,
            }
            .into());
        }
    }

    Ok(validated)
}
