//! # Block Header Codec
//!
//! Fixed layout encoding of the 80-byte Bitcoin block header and the header
//! chain wire format (headers concatenated without separators or length
//! prefixes).
//!
//! | offset | size | field             |
//! |--------|------|-------------------|
//! | 0      | 4    | version (i32, LE) |
//! | 4      | 32   | previous hash     |
//! | 36     | 32   | Merkle root       |
//! | 68     | 4    | time (u32, LE)    |
//! | 72     | 4    | bits (u32, LE)    |
//! | 76     | 4    | nonce (u32, LE)   |

use bitcoin::{
    block::{Header, Version},
    hashes::Hash,
    BlockHash, CompactTarget, TxMerkleNode,
};
use borsh::{BorshDeserialize, BorshSerialize};
use crypto_bigint::U256;
use serde::{Deserialize, Serialize};
use spv_errors::MalformedInputError;

use crate::common::{
    constants::{NetworkConstants, HASH_LENGTH, HEADER_LENGTH},
    hashes::calculate_double_sha256,
};

pub mod target;

pub use target::{
    bits_to_difficulty, bits_to_target, check_hash_valid, is_within_retarget_bounds,
    target_to_difficulty, target_to_difficulty_with,
};

/// A Bitcoin block header.
///
/// Hashes are stored in internal byte order, exactly as they appear in the
/// serialized header.
#[derive(
    Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, BorshDeserialize, BorshSerialize,
)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Encodes the header into its 80-byte consensus form.
    pub fn serialize(&self) -> [u8; HEADER_LENGTH] {
        let mut bytes = [0u8; HEADER_LENGTH];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_block_hash);
        bytes[36..68].copy_from_slice(&self.merkle_root);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Decodes a header from exactly 80 bytes.
    ///
    /// # Errors
    ///
    /// [`MalformedInputError::MalformedHeader`] if `bytes` is not 80 bytes long.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, MalformedInputError> {
        let bytes: &[u8; HEADER_LENGTH] = bytes
            .try_into()
            .map_err(|_| MalformedInputError::MalformedHeader(bytes.len()))?;

        Ok(BlockHeader {
            version: i32::from_le_bytes(read_word(bytes, 0)),
            prev_block_hash: read_hash(bytes, 4),
            merkle_root: read_hash(bytes, 36),
            time: u32::from_le_bytes(read_word(bytes, 68)),
            bits: u32::from_le_bytes(read_word(bytes, 72)),
            nonce: u32::from_le_bytes(read_word(bytes, 76)),
        })
    }

    /// Computes the double SHA256 hash of the block header.
    pub fn compute_block_hash(&self) -> [u8; 32] {
        calculate_double_sha256(&self.serialize())
    }

    /// Target decoded from the header's compact `bits`.
    pub fn target(&self) -> U256 {
        bits_to_target(self.bits)
    }

    /// Difficulty of the header relative to the network's reference target.
    pub fn difficulty(&self, constants: &NetworkConstants) -> U256 {
        bits_to_difficulty(self.bits, constants)
    }

    /// Whether the header hash satisfies the header's own target.
    pub fn has_valid_work(&self) -> bool {
        check_hash_valid(&self.compute_block_hash(), &self.target())
    }
}

fn read_word(bytes: &[u8; HEADER_LENGTH], offset: usize) -> [u8; 4] {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    word
}

fn read_hash(bytes: &[u8; HEADER_LENGTH], offset: usize) -> [u8; HASH_LENGTH] {
    let mut hash = [0u8; HASH_LENGTH];
    hash.copy_from_slice(&bytes[offset..offset + HASH_LENGTH]);
    hash
}

/// Splits a concatenation of headers into decoded headers.
///
/// # Errors
///
/// [`MalformedInputError::InvalidChainLength`] if the input is not a multiple
/// of 80 bytes. An empty input decodes to an empty chain.
pub fn deserialize_chain(bytes: &[u8]) -> Result<Vec<BlockHeader>, MalformedInputError> {
    if bytes.len() % HEADER_LENGTH != 0 {
        return Err(MalformedInputError::InvalidChainLength(bytes.len()));
    }

    bytes
        .chunks_exact(HEADER_LENGTH)
        .map(BlockHeader::deserialize)
        .collect()
}

/// Concatenates the serialized headers.
pub fn serialize_chain(headers: &[BlockHeader]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(headers.len() * HEADER_LENGTH);
    for header in headers {
        bytes.extend_from_slice(&header.serialize());
    }
    bytes
}

impl From<Header> for BlockHeader {
    fn from(header: Header) -> Self {
        BlockHeader {
            version: header.version.to_consensus(),
            prev_block_hash: header.prev_blockhash.to_byte_array(),
            merkle_root: header.merkle_root.to_byte_array(),
            time: header.time,
            bits: header.bits.to_consensus(),
            nonce: header.nonce,
        }
    }
}

impl From<BlockHeader> for Header {
    fn from(val: BlockHeader) -> Self {
        Header {
            version: Version::from_consensus(val.version),
            prev_blockhash: BlockHash::from_byte_array(val.prev_block_hash),
            merkle_root: TxMerkleNode::from_byte_array(val.merkle_root),
            time: val.time,
            bits: CompactTarget::from_consensus(val.bits),
            nonce: val.nonce,
        }
    }
}
