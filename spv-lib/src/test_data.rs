//! Golden vectors shared by the unit tests.

use hex_literal::hex;

/// Three consecutive mainnet headers (August 2025), chain order.
pub const MAINNET_HEADERS: [[u8; 80]; 3] = [
    hex!("00800020e77cf8eb3114116cc2e6d4aca9b27d35bb5402a5054a010000000000000000005b41d83c40c8226c48807401b0b08aa8e4e2eb053bf91d580f62cd49f5c2a99f802ba468b32c0217cea24c34"),
    hex!("00606a3190af271dec0197c6b87f218070c5611cf0c506f6671c0200000000000000000021f21732014796558e6736b15de9b132ca65318b42fe5759b153c63dd4306e38842da468b32c021737421730"),
    hex!("000000264a14e21adad047d981c06a26446e345eda3d8beb807401000000000000000000fc01df2139954b36cebc3fa6fbf6a7160a67d34b67e5c4aa2a7ce46f5bb42a83642ea468b32c0217d14ba4d1"),
];

/// Display order hashes of [`MAINNET_HEADERS`].
pub const MAINNET_HEADER_HASHES: [[u8; 32]; 3] = [
    hex!("000000000000000000021c67f606c5f01c61c57080217fb8c69701ec1d27af90"),
    hex!("000000000000000000017480eb8b3dda5e346e44266ac081d947d0da1ae2144a"),
    hex!("000000000000000000003379f29f2938129025576015e5574952b785b0618522"),
];

/// Difficulty of bits `0x17022cb3`.
pub const MAINNET_HEADERS_DIFFICULTY: u64 = 129435235580344;

/// Seven testnet3 headers confirming a deposit sweep transaction. Headers 4
/// to 6 are minimum difficulty blocks.
pub const TESTNET_CHAIN: [u8; 560] = hex!(
    "04000020642125b3910fdaead521b57955e28893d89f8ce7fd3ba1dd6d01000000000000f9e17a266a2267ee02d5ab82a75a76805db821a13abd2e80e0950d883311e5355dc21c62ed3e031adefc02c4"
    "040000205b6de55e069be71b21a62cd140dc7031225f7258dc758f19ea01000000000000139966d27d9ed0c0c1ed9162c2fea2ccf0ba212706f6bc421d0a2b6211de040d1ac41c62ed3e031a4726538f"
    "04e000208475e15e0314635d32abf04c761fee528d6a3f2db3b3d13798000000000000002a3fa06fecd9dd4bf2e25e22a95d4f65435d5c5b42bcf498b4e756f9f4ea67cea1c51c62ed3e031a9d7bf3ac"
    "000000203f16d450c51853a4cd9569d225028aa08ab6139eee31f4f67a010000000000004cda79bc48b970de2fb29c3f38626eb9d70d8bae7b92aad09f2a0ad2d2f334d35bca1c62ffff001d048fc217"
    "00000020687e487acbf5eb375c631a15127fbf7d80ca084461e7f26f92c509b6000000006fad33bd7c8d651bd6dc86c286f0a99340b668f019b9e97a59fd392c36c4f46910cf1c62ffff001d407facaa"
    "0400002040f4c65610f26f06c4365305b956934501713e01c2fc08b919e0bc1b00000000e401a6a884ba015e83c6fe2cd363e877ef03982e81eaff4e2c95af1e23a670f407d41c62ffff001d58c64d18"
    "0400002038854bd62f802e1de14653eceeb7a80290f5e99b8e9db517e36f000000000000a494b8034039e7855b75563ab83c9410dd67e89bb58e6cd93b85290a885dd749f4d61c62ed3e031ad9a83746"
);

/// Display order hashes of [`TESTNET_CHAIN`].
pub const TESTNET_CHAIN_HASHES: [[u8; 32]; 7] = [
    hex!("00000000000001ea198f75dc58725f223170dc40d12ca6211be79b065ee56d5b"),
    hex!("000000000000009837d1b3b32d3f6a8d52ee1f764cf0ab325d6314035ee17584"),
    hex!("000000000000017af6f431ee9e13b68aa08a0225d26995cda45318c550d4163f"),
    hex!("00000000b609c5926ff2e7614408ca807dbf7f12151a635c37ebf5cb7a487e68"),
    hex!("000000001bbce019b908fcc2013e7101459356b9055336c4066ff21056c6f440"),
    hex!("0000000000006fe317b59d8e9be9f59002a8b7eeec5346e11d2e802fd64b8538"),
    hex!("000000000000015f5ff97247fe2bfa2740067a00abc1a462ad4e88491742e5ac"),
];

/// Difficulty of bits `0x1a033eed`.
pub const TESTNET_CHAIN_DIFFICULTY: u64 = 5168815;

/// Display order hash of the transaction confirmed by the first testnet header.
pub const TESTNET_TX_HASH: [u8; 32] =
    hex!("5083822ed0b8d0bc661362b778e666cb572ff6d5152193992dd69d3207995753");

pub const TESTNET_TX_INDEX: u32 = 6;

/// Merkle branch of [`TESTNET_TX_HASH`], internal byte order, deepest first.
pub const TESTNET_MERKLE_PROOF: [u8; 160] = hex!(
    "2ea95cfb5e8f0d4b4757368c95f5a1cfa1b98934e9086f7b59cf53caf3fd2c32"
    "d1d41ad3ebb735723098bf8a1fd243e1ccfe4057e2feef750367c9f6fedfae82"
    "a3b5eaf9ac6cfe8b05432e855818c6787a3b1e98f8fd5323b4f5a8b941a07f83"
    "77e397f5bae83046e0c06cedc26d752ebedba66ad8a40358e957f8f3d31216a5"
    "8686e7ba4b35ce0c41f0651ae65dc7e4755ebcd5d6a5071e8a4f0c0e650105a0"
);
