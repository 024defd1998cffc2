//! # Compact Target Arithmetic
//!
//! Conversions between a header's compact `bits`, its full 256-bit target and
//! the integer difficulty relative to a reference target. All arithmetic is
//! exact integer arithmetic on [`U256`].

use crypto_bigint::{Encoding, U256};

use crate::common::constants::{NetworkConstants, DIFFICULTY_ONE_TARGET};

/// Converts compact target representation (bits) to the full target.
///
/// The compact target uses a floating-point-like representation:
/// - Bits 24-31: Size/exponent (how many bytes the mantissa occupies)
/// - Bits 0-23: Mantissa (the significant digits)
///
/// and decodes to `mantissa * 256^(size - 3)`.
///
/// The mantissa is signed in Bitcoin Core: a set sign bit decodes to zero, as
/// does an encoding that overflows 256 bits. A zero target can never be met.
///
/// ## Parameters
///
/// * `bits` - Compact target representation from block header
///
/// ## Returns
///
/// * [`U256`] - Full target
pub fn bits_to_target(bits: u32) -> U256 {
    let size = (bits >> 24) as usize;
    let mantissa = bits & 0x00ffffff;

    if mantissa > 0x7F_FFFF {
        return U256::ZERO;
    }

    let overflow = mantissa != 0
        && (size > 34 || (mantissa > 0xff && size > 33) || (mantissa > 0xffff && size > 32));
    if overflow {
        return U256::ZERO;
    }

    if size <= 3 {
        U256::from(mantissa >> (8 * (3 - size)))
    } else {
        U256::from(mantissa) << (8 * (size - 3))
    }
}

/// Difficulty of `target` relative to Bitcoin's "difficulty 1" target
/// `0xFFFF << 208`, rounded down.
pub fn target_to_difficulty(target: &U256) -> U256 {
    target_to_difficulty_with(&DIFFICULTY_ONE_TARGET, target)
}

/// Difficulty of `target` relative to `reference`, rounded down.
///
/// A zero target has no finite difficulty; it is reported as [`U256::MAX`].
pub fn target_to_difficulty_with(reference: &U256, target: &U256) -> U256 {
    if *target == U256::ZERO {
        return U256::MAX;
    }
    reference.wrapping_div(target)
}

/// Difficulty of a compact target on the given network.
pub fn bits_to_difficulty(bits: u32, constants: &NetworkConstants) -> U256 {
    target_to_difficulty_with(&constants.difficulty_one_target, &bits_to_target(bits))
}

/// Checks if a block hash meets the target.
///
/// The hash is read as a little-endian number, the way Bitcoin compares
/// header hashes against targets.
pub fn check_hash_valid(hash: &[u8; 32], target: &U256) -> bool {
    if *target == U256::ZERO {
        return false;
    }
    U256::from_le_bytes(*hash) <= *target
}

/// Whether `new` lies within a factor of four of `old` in either direction,
/// the most a single retarget can move the target.
pub fn is_within_retarget_bounds(old: &U256, new: &U256) -> bool {
    if *old == U256::ZERO || *new == U256::ZERO {
        return false;
    }

    let lower = *old >> 2;
    let quarter = *new >> 2;
    let remainder = *new & U256::from(3u8);
    let under_upper = quarter < *old || (quarter == *old && remainder == U256::ZERO);

    *new >= lower && under_upper
}
