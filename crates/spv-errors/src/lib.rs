//! # SPV Errors
//!
//! This crate defines the error types shared by the verification library, the
//! relays and the proof assembler, plus the main error wrapper ([`SpvError`]).
//!
//! ## Error Hierarchy
//!
//! The crate provides a two-level error hierarchy:
//!
//! 1. **Class errors** - One enum per failure class:
//!    - [`MalformedInputError`]: wrong-length headers, chains or proofs. Always
//!      raised before any semantic check.
//!    - [`ConsensusError`]: insufficient work, broken continuity, wrong
//!      difficulty, Merkle mismatch. A permanent rejection of that input.
//!    - [`RelayStateError`]: the relay is not (or already) initialized, or does
//!      not know enough history to answer.
//!    - [`AuthorizationError`]: the caller lacks the governance or submitter
//!      capability.
//!    - [`ProviderError`]: the off-chain data provider could not supply what
//!      the proof assembler asked for.
//!
//! 2. **[`SpvError`]** - The wrapper that callers match on. [`SpvError::kind`]
//!    tells "your proof is bad" apart from "the relay does not know enough yet"
//!    and from authorization failures, so each can be monitored separately.
//!
//! None of these are transient: the same inputs against the same relay state
//! always produce the same error. Only [`ProviderError`] may be retried, and
//! only by the assembler.

use crypto_bigint::U256;
use thiserror::Error;

/// Formats an internal (little-endian) hash the way block explorers display it.
pub fn display_hash(hash: &[u8; 32]) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

// ============================================================================
// Class errors
// ============================================================================

/// Input that could not be decoded at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("Malformed header: expected 80 bytes, got {0}")]
    MalformedHeader(usize),
    #[error("Invalid header chain length: {0} bytes is not a multiple of 80")]
    InvalidChainLength(usize),
    #[error("Invalid header length: expected {expected} headers, got {actual}")]
    InvalidHeaderLength { expected: usize, actual: usize },
    #[error("Invalid Merkle proof length: {0} bytes is not a multiple of 32")]
    InvalidMerkleProofLength(usize),
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),
}

/// Proof-of-work and inclusion rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsensusError {
    #[error("Header {index} does not reference the previous header")]
    DiscontinuousChain { index: usize },
    #[error("Header {index} does not satisfy its target")]
    InsufficientWork { index: usize },
    #[error("Header {index} has difficulty {difficulty} outside the accepted epochs")]
    WrongEpochDifficulty { index: usize, difficulty: U256 },
    #[error("Header {index} returns to the previous epoch difficulty")]
    OutOfOrderDifficultyTransition { index: usize },
    #[error("Merkle proof is empty but the leaf is not the root")]
    EmptyProof,
    #[error("Merkle index {index} does not fit a branch of depth {depth}")]
    InvalidMerkleIndex { index: u64, depth: usize },
    #[error("Merkle proof does not lead to root {}", display_hash(.root))]
    RootMismatch { root: [u8; 32] },
    #[error("Invalid target in pre-retarget header {index}")]
    InvalidTargetInPreHeaders { index: usize },
    #[error("Invalid target in new epoch header {index}")]
    InvalidTargetInNewEpoch { index: usize },
    #[error("Invalid target in header at height {height}")]
    InvalidTarget { height: u32 },
    #[error("Insufficient accumulated difficulty: required {required}, observed {observed}")]
    InsufficientAccumulatedDifficulty { required: U256, observed: U256 },
}

/// The relay cannot answer with what it currently knows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayStateError {
    #[error("Relay is not initialized")]
    NotInitialized,
    #[error("Relay is already initialized")]
    AlreadyInitialized,
    #[error("Invalid genesis height {0}")]
    InvalidGenesisHeight(u32),
    #[error("Invalid proof length {0}")]
    InvalidProofLength(usize),
    #[error("Epoch {0} is not proven yet")]
    EpochNotProven(u32),
    #[error("Epoch {0} is before relay genesis")]
    EpochBeforeGenesis(u32),
    #[error("Header chain starts in an epoch older than the previous one")]
    ChainTooOld,
    #[error("Invalid ancestor height {0}")]
    InvalidAncestorHeight(u32),
    #[error("Ancestor at height {0} is not recorded in the relay")]
    AncestorNotRecorded(u32),
    #[error("Ancestor at height {height} does not match the recorded block {}", display_hash(.recorded))]
    InvalidAncestorBlock { height: u32, recorded: [u8; 32] },
}

/// The caller is not allowed to perform the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("{0} is not the relay governance")]
    NotGovernance(String),
    #[error("Submitter {0} is not authorized")]
    SubmitterUnauthorized(String),
}

/// Errors raised while assembling a proof from a data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Transaction has {actual} confirmations, {required} required")]
    InsufficientConfirmations { required: u32, actual: u32 },
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),
    #[error("Block at height {0} not found")]
    BlockNotFound(u32),

    #[error(transparent)]
    Other(#[from] eyre::Report),
}

// ============================================================================
// Main error wrapper
// ============================================================================

/// Failure class of an [`SpvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    Consensus,
    RelayState,
    Unauthorized,
    Provider,
    Config,
    Other,
}

/// Main error type of the workspace.
#[derive(Debug, Error)]
pub enum SpvError {
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),
    #[error(transparent)]
    Consensus(#[from] ConsensusError),
    #[error(transparent)]
    RelayState(#[from] RelayStateError),
    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Environment variable {0} is malformed: {1}")]
    EnvVarMalformed(&'static str, String),
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(#[from] std::env::VarError),

    #[error(transparent)]
    Other(#[from] eyre::Report),
}

impl SpvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpvError::Malformed(_) => ErrorKind::Malformed,
            SpvError::Consensus(_) => ErrorKind::Consensus,
            SpvError::RelayState(_) => ErrorKind::RelayState,
            SpvError::Unauthorized(_) => ErrorKind::Unauthorized,
            SpvError::Provider(_) => ErrorKind::Provider,
            SpvError::ConfigError(_)
            | SpvError::EnvVarMalformed(_, _)
            | SpvError::EnvVarNotSet(_) => ErrorKind::Config,
            SpvError::Other(_) => ErrorKind::Other,
        }
    }

    /// Whether the error condemns the submitted input itself, as opposed to
    /// the relay state or the caller.
    pub fn is_invalid_proof(&self) -> bool {
        matches!(self.kind(), ErrorKind::Malformed | ErrorKind::Consensus)
    }
}

impl From<hex::FromHexError> for MalformedInputError {
    fn from(value: hex::FromHexError) -> Self {
        MalformedInputError::InvalidHex(value.to_string())
    }
}

impl From<hex::FromHexError> for SpvError {
    fn from(value: hex::FromHexError) -> Self {
        SpvError::Malformed(value.into())
    }
}
