//! # SPV Data Provider
//!
//! The contract the proof assembler needs from a Bitcoin data source (a full
//! node, an Electrum server, a block explorer), a retry wrapper for flaky
//! sources, and an in-memory implementation for tests and offline tooling.
//!
//! Transaction hashes cross this boundary as [`bitcoin::Txid`] values;
//! Merkle siblings are returned in display (big-endian) order, the way
//! Electrum style servers report them.

mod memory;
mod provider;
mod retry;

pub use memory::InMemoryProvider;
pub use provider::{BitcoinDataProvider, TransactionMerkleBranch};
pub use retry::{RetryConfig, RetryableError, RetryingProvider};
pub use spv_errors::ProviderError;
