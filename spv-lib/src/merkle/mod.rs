//! # Merkle Inclusion Proofs
//!
//! Bitcoin transaction Merkle trees: recomputing a root from a leaf and its
//! branch, and (for the off-chain side) building trees and branches from a
//! block's transaction hashes. Odd levels duplicate their last node, as in
//! Bitcoin Core.

use spv_errors::ConsensusError;

use crate::common::hashes::hash_pair;

/// Verifies that `leaf` sits at position `index` of the tree committed to by
/// `root`.
///
/// Siblings are given deepest first. At each level the sibling goes first
/// when the current index bit is 1 and second when it is 0.
///
/// # Errors
///
/// - [`ConsensusError::EmptyProof`] if no siblings are given but the leaf is
///   not the root at index 0
/// - [`ConsensusError::InvalidMerkleIndex`] if the index has bits set above
///   the branch depth
/// - [`ConsensusError::RootMismatch`] if the recomputed root differs
pub fn verify_merkle_inclusion(
    leaf: &[u8; 32],
    root: &[u8; 32],
    siblings: &[[u8; 32]],
    index: u64,
) -> Result<(), ConsensusError> {
    if siblings.is_empty() && (index != 0 || leaf != root) {
        return Err(ConsensusError::EmptyProof);
    }

    let depth = siblings.len();
    let overflow = u32::try_from(depth)
        .ok()
        .and_then(|depth| index.checked_shr(depth))
        .unwrap_or(0);
    if overflow != 0 {
        return Err(ConsensusError::InvalidMerkleIndex { index, depth });
    }

    if compute_root(leaf, siblings, index) != *root {
        return Err(ConsensusError::RootMismatch { root: *root });
    }

    Ok(())
}

/// Folds a branch into the root it commits to.
pub fn compute_root(leaf: &[u8; 32], siblings: &[[u8; 32]], index: u64) -> [u8; 32] {
    let mut current = *leaf;
    let mut position = index;

    for sibling in siblings {
        current = if position & 1 == 1 {
            hash_pair(sibling, &current)
        } else {
            hash_pair(&current, sibling)
        };
        position >>= 1;
    }

    current
}

/// Merkle root of a block's transaction hashes. `None` for an empty block.
pub fn merkle_root(leaves: &[[u8; 32]]) -> Option<[u8; 32]> {
    let mut level = leaves.to_vec();
    if level.is_empty() {
        return None;
    }

    while level.len() > 1 {
        level = next_level(&level);
    }

    level.first().copied()
}

/// Branch proving the leaf at `index`, deepest sibling first. `None` if the
/// index is out of range.
pub fn merkle_branch(leaves: &[[u8; 32]], index: usize) -> Option<Vec<[u8; 32]>> {
    if index >= leaves.len() {
        return None;
    }

    let mut branch = Vec::new();
    let mut level = leaves.to_vec();
    let mut position = index;

    while level.len() > 1 {
        let sibling = if position % 2 == 1 {
            level[position - 1]
        } else if position + 1 < level.len() {
            level[position + 1]
        } else {
            level[position]
        };
        branch.push(sibling);

        level = next_level(&level);
        position /= 2;
    }

    Some(branch)
}

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            hash_pair(left, right)
        })
        .collect()
}
