//! # SPV Library
//!
//! Stateless Bitcoin SPV verification: the 80-byte header codec and compact
//! target arithmetic ([`header`]), header chain validation against a pair of
//! epoch difficulties ([`header_chain`]), Merkle inclusion proofs ([`merkle`])
//! and the proof wire format ([`proof`]).
//!
//! Every function here is pure. Hashes are kept in Bitcoin's internal
//! (little-endian) byte order everywhere; only user facing formatting reverses
//! them.

pub mod common;
pub mod header;
pub mod header_chain;
pub mod merkle;
pub mod proof;

#[cfg(test)]
pub(crate) mod test_data;
