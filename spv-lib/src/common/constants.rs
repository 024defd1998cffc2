use bitcoin::Network;
use crypto_bigint::U256;

/// Number of blocks in a difficulty adjustment epoch.
pub const BLOCKS_PER_EPOCH: u32 = 2016;

/// Serialized size of a block header.
pub const HEADER_LENGTH: usize = 80;

/// Size of a hash or a Merkle node.
pub const HASH_LENGTH: usize = 32;

/// Bitcoin's "difficulty 1" target, `0xFFFF << 208`.
pub const DIFFICULTY_ONE_TARGET: U256 =
    U256::from_be_hex("00000000FFFF0000000000000000000000000000000000000000000000000000");

/// Regtest proof of work limit, `0x7FFFFF << 232`.
pub const REGTEST_POW_LIMIT: U256 =
    U256::from_be_hex("7FFFFF0000000000000000000000000000000000000000000000000000000000");

/// Network dependent values used by the difficulty arithmetic.
///
/// `difficulty_one_target` is the numerator of every difficulty computed for
/// the network. Mainnet, testnet and signet share Bitcoin's reference target;
/// regtest measures difficulty against its own proof of work limit so that
/// locally mined chains carry small non-zero difficulties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConstants {
    pub max_bits: u32,
    pub difficulty_one_target: U256,
}

pub const MAINNET_CONSTANTS: NetworkConstants = NetworkConstants {
    max_bits: 0x1D00FFFF,
    difficulty_one_target: DIFFICULTY_ONE_TARGET,
};

pub const REGTEST_CONSTANTS: NetworkConstants = NetworkConstants {
    max_bits: 0x207FFFFF,
    difficulty_one_target: REGTEST_POW_LIMIT,
};

impl NetworkConstants {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Regtest => REGTEST_CONSTANTS,
            _ => MAINNET_CONSTANTS,
        }
    }
}

impl Default for NetworkConstants {
    fn default() -> Self {
        MAINNET_CONSTANTS
    }
}

/// Epoch number of a block height.
pub const fn epoch_of(height: u32) -> u32 {
    height / BLOCKS_PER_EPOCH
}

/// First height of an epoch, saturating at the top of the height range.
pub const fn epoch_start_height(epoch: u32) -> u32 {
    epoch.saturating_mul(BLOCKS_PER_EPOCH)
}
