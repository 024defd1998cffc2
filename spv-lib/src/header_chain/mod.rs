//! # Header Chain Validation
//!
//! Checks an ordered list of headers against the two difficulties a relay
//! currently accepts. For every header, in order:
//!
//! 1. **Continuity**: it commits to the hash of the header before it.
//! 2. **Proof of work**: its hash does not exceed the target of its own bits.
//! 3. **Epoch difficulty**: its difficulty equals the previous or the current
//!    epoch difficulty. Skipped for the whole chain when both are exactly 1,
//!    the testnet minimum difficulty case.
//! 4. **Transition order**: once a header at the current difficulty is seen,
//!    every later header must be at the current difficulty too.
//!
//! Validation has no side effects and may run on any number of threads.

use crypto_bigint::U256;
use spv_errors::{ConsensusError, MalformedInputError, SpvError};

use crate::common::constants::NetworkConstants;
use crate::header::{check_hash_valid, target_to_difficulty_with, BlockHeader};

/// Facts about a chain that passed [`validate_header_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedChain {
    /// Hash of the first header, internal byte order.
    pub first_hash: [u8; 32],
    /// Hash of the last header, internal byte order.
    pub last_hash: [u8; 32],
    /// Number of headers in the chain.
    pub header_count: usize,
    /// Sum of the difficulties of all headers.
    pub accumulated_difficulty: U256,
}

/// Validates a header chain against the previous and current epoch
/// difficulties.
///
/// # Parameters
///
/// * `headers` - Headers in chain order, oldest first
/// * `previous_epoch_difficulty` - Difficulty of the epoch before the current one
/// * `current_epoch_difficulty` - Difficulty of the current epoch
/// * `constants` - Network whose reference target defines difficulty
///
/// # Errors
///
/// - [`MalformedInputError::InvalidHeaderLength`] for an empty chain
/// - [`ConsensusError::DiscontinuousChain`]
/// - [`ConsensusError::InsufficientWork`]
/// - [`ConsensusError::WrongEpochDifficulty`]
/// - [`ConsensusError::OutOfOrderDifficultyTransition`]
pub fn validate_header_chain(
    headers: &[BlockHeader],
    previous_epoch_difficulty: &U256,
    current_epoch_difficulty: &U256,
    constants: &NetworkConstants,
) -> Result<ValidatedChain, SpvError> {
    let Some(first) = headers.first() else {
        return Err(MalformedInputError::InvalidHeaderLength {
            expected: 1,
            actual: 0,
        }
        .into());
    };

    let minimum_difficulty_chain =
        *previous_epoch_difficulty == U256::ONE && *current_epoch_difficulty == U256::ONE;

    let first_hash = first.compute_block_hash();
    let mut previous_hash = first_hash;
    let mut seen_current = false;
    let mut accumulated_difficulty = U256::ZERO;

    for (index, header) in headers.iter().enumerate() {
        let hash = if index == 0 {
            first_hash
        } else {
            if header.prev_block_hash != previous_hash {
                return Err(ConsensusError::DiscontinuousChain { index }.into());
            }
            header.compute_block_hash()
        };

        let target = header.target();
        if !check_hash_valid(&hash, &target) {
            return Err(ConsensusError::InsufficientWork { index }.into());
        }

        let difficulty = target_to_difficulty_with(&constants.difficulty_one_target, &target);

        if !minimum_difficulty_chain {
            if difficulty != *previous_epoch_difficulty && difficulty != *current_epoch_difficulty
            {
                return Err(ConsensusError::WrongEpochDifficulty { index, difficulty }.into());
            }

            if seen_current && difficulty != *current_epoch_difficulty {
                return Err(ConsensusError::OutOfOrderDifficultyTransition { index }.into());
            }

            if difficulty == *current_epoch_difficulty {
                seen_current = true;
            }
        }

        accumulated_difficulty = accumulated_difficulty.wrapping_add(&difficulty);
        previous_hash = hash;
    }

    tracing::trace!(
        "Validated header chain of {} headers, accumulated difficulty {}",
        headers.len(),
        accumulated_difficulty
    );

    Ok(ValidatedChain {
        first_hash,
        last_hash: previous_hash,
        header_count: headers.len(),
        accumulated_difficulty,
    })
}
