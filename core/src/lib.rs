//! # SPV Relay Core
//!
//! Stateful side of Bitcoin SPV verification:
//!
//! - [`relay`]: the epoch-difficulty relay and the sliding-window relay that
//!   proofs are checked against
//! - [`verifier`]: the proof verification entry point
//! - [`assembler`]: builds proofs from a Bitcoin data provider
//! - [`cli`]: the `spv-relay` command line interface

pub mod assembler;
pub mod cli;
pub mod relay;
pub mod utils;
pub mod verifier;

#[cfg(test)]
mod test_data;

pub use assembler::{AssembledProof, ProofAssembler};
pub use relay::{ChainAnchor, EpochRelay, WindowRelay};
pub use verifier::verify_proof;
