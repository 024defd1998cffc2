//! # SPV Proof
//!
//! The proof a relayer submits for one transaction. Variable length fields
//! use the fixed-width wire encodings: the Merkle branch is a concatenation of
//! 32-byte siblings and the header chain a concatenation of 80-byte headers,
//! neither padded nor length prefixed.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use spv_errors::MalformedInputError;

use crate::common::constants::HASH_LENGTH;
use crate::header::{deserialize_chain, BlockHeader};

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpvProof {
    /// Transaction hash, internal byte order.
    #[serde(with = "hex")]
    pub tx_hash: [u8; 32],
    /// Merkle siblings, internal byte order, deepest first.
    #[serde(with = "hex")]
    pub merkle_proof: Vec<u8>,
    /// Position of the transaction in its block.
    pub tx_index_in_block: u32,
    /// Headers starting with the block that contains the transaction.
    #[serde(with = "hex")]
    pub bitcoin_headers: Vec<u8>,
}

impl SpvProof {
    /// Splits the Merkle branch into siblings.
    pub fn siblings(&self) -> Result<Vec<[u8; 32]>, MalformedInputError> {
        parse_merkle_proof(&self.merkle_proof)
    }

    /// Decodes the header chain.
    pub fn headers(&self) -> Result<Vec<BlockHeader>, MalformedInputError> {
        deserialize_chain(&self.bitcoin_headers)
    }
}

/// Splits a concatenated Merkle branch into 32-byte siblings.
pub fn parse_merkle_proof(bytes: &[u8]) -> Result<Vec<[u8; 32]>, MalformedInputError> {
    if bytes.len() % HASH_LENGTH != 0 {
        return Err(MalformedInputError::InvalidMerkleProofLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(HASH_LENGTH)
        .map(|chunk| {
            let mut sibling = [0u8; HASH_LENGTH];
            sibling.copy_from_slice(chunk);
            sibling
        })
        .collect())
}

/// Concatenates siblings into the wire encoding.
pub fn serialize_merkle_proof(siblings: &[[u8; 32]]) -> Vec<u8> {
    siblings.concat()
}
