//! # Sliding-Window Relay
//!
//! Keeps the hashes of the most recent `capacity` blocks of the longest chain
//! it has seen, in a ring buffer indexed by `height % capacity`. The buffer is
//! allocated once and never resized: a height older than the window is simply
//! no longer provable.
//!
//! The chain is extended in batches of [`HEADERS_PER_BATCH`] headers: a
//! recorded ancestor followed by six new headers. Building on an ancestor
//! below the tip replaces everything recorded above it, which is how reorgs
//! are absorbed.
//!
//! Difficulty is tracked through epoch start headers. Headers must carry the
//! target of their epoch's first block; a header opening a new epoch may
//! declare a new target within the factor four retarget clamp.

use std::sync::Arc;

use crypto_bigint::U256;
use spv_config::{RelayConfig, VerifierConfig, WindowConfig};
use spv_errors::{
    AuthorizationError, ConsensusError, MalformedInputError, RelayStateError, SpvError,
};
use spv_lib::common::constants::{NetworkConstants, BLOCKS_PER_EPOCH};
use spv_lib::header::{deserialize_chain, is_within_retarget_bounds, BlockHeader};
use spv_lib::header_chain::{validate_header_chain, ValidatedChain};
use spv_lib::proof::SpvProof;
use tokio::sync::{RwLock, RwLockReadGuard};

use super::ChainAnchor;

/// Headers in one `add_headers` call: the ancestor and six new headers.
pub const HEADERS_PER_BATCH: usize = 7;

/// Headers in one `validate` call.
pub const VALIDATION_CHAIN_LENGTH: usize = 6;

/// Position of the recorded header within a `validate` chain.
pub const VALIDATION_ANCHOR_INDEX: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EpochStart {
    height: u32,
    header: BlockHeader,
}

#[derive(Debug, Clone)]
pub struct WindowRelayState {
    constants: NetworkConstants,
    governance: String,
    slots: Vec<Option<(u32, [u8; 32])>>,
    genesis_height: Option<u32>,
    tip_height: Option<u32>,
    epoch_start: Option<EpochStart>,
    previous_epoch_start: Option<EpochStart>,
}

impl WindowRelayState {
    pub fn new(
        capacity: usize,
        constants: NetworkConstants,
        governance: impl Into<String>,
    ) -> Result<Self, SpvError> {
        if capacity < HEADERS_PER_BATCH {
            return Err(SpvError::ConfigError(format!(
                "Window capacity {capacity} is smaller than a batch of {HEADERS_PER_BATCH} headers"
            )));
        }

        Ok(Self {
            constants,
            governance: governance.into(),
            slots: vec![None; capacity],
            genesis_height: None,
            tip_height: None,
            epoch_start: None,
            previous_epoch_start: None,
        })
    }

    pub fn from_config(window: &WindowConfig, relay: &RelayConfig) -> Result<Self, SpvError> {
        Self::new(
            window.capacity,
            NetworkConstants::for_network(relay.network),
            relay.governance.clone(),
        )
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, height: u32) -> usize {
        height as usize % self.slots.len()
    }

    fn recorded(&self, height: u32) -> Option<[u8; 32]> {
        match self.slots[self.slot(height)] {
            Some((recorded_height, hash)) if recorded_height == height => Some(hash),
            _ => None,
        }
    }

    /// Height at which `hash` is recorded, if it is.
    fn recorded_height(&self, hash: &[u8; 32]) -> Option<u32> {
        self.slots
            .iter()
            .flatten()
            .find(|(_, recorded)| recorded == hash)
            .map(|(height, _)| *height)
    }

    fn record(&mut self, height: u32, hash: [u8; 32]) {
        let slot = self.slot(height);
        self.slots[slot] = Some((height, hash));
    }

    fn tip(&self) -> Result<u32, SpvError> {
        self.tip_height
            .ok_or_else(|| RelayStateError::NotInitialized.into())
    }

    /// Seeds the window with a tip header and the first header of its epoch.
    pub fn genesis(
        &mut self,
        caller: &str,
        epoch_start_header: &[u8],
        tip_header: &[u8],
        tip_height: u32,
    ) -> Result<(), SpvError> {
        if caller != self.governance {
            tracing::warn!("Rejected window genesis from {}", caller);
            return Err(AuthorizationError::NotGovernance(caller.to_string()).into());
        }
        if self.tip_height.is_some() {
            return Err(RelayStateError::AlreadyInitialized.into());
        }

        let epoch_start = BlockHeader::deserialize(epoch_start_header)?;
        let tip = BlockHeader::deserialize(tip_header)?;
        let epoch_start_height = tip_height - tip_height % BLOCKS_PER_EPOCH;

        if (tip_height == epoch_start_height && tip != epoch_start) || tip.bits != epoch_start.bits
        {
            return Err(RelayStateError::InvalidGenesisHeight(tip_height).into());
        }

        self.record(tip_height, tip.compute_block_hash());
        self.genesis_height = Some(tip_height);
        self.tip_height = Some(tip_height);
        self.epoch_start = Some(EpochStart {
            height: epoch_start_height,
            header: epoch_start,
        });

        tracing::info!(
            "Window relay genesis at height {}, epoch start {}",
            tip_height,
            epoch_start_height
        );

        Ok(())
    }

    /// Epoch start whose target applies at `height`.
    fn epoch_start_for(&self, height: u32) -> Result<EpochStart, SpvError> {
        let current = self.epoch_start.ok_or(RelayStateError::NotInitialized)?;
        if height >= current.height {
            return Ok(current);
        }

        match self.previous_epoch_start {
            Some(previous) if height >= previous.height => Ok(previous),
            _ => Err(RelayStateError::ChainTooOld.into()),
        }
    }

    /// Checks targets and runs chain validation for headers starting at
    /// `first_height`. Returns the epoch start the headers cross into, if any.
    fn check_headers(
        &self,
        first_height: u32,
        headers: &[BlockHeader],
    ) -> Result<(ValidatedChain, Option<EpochStart>), SpvError> {
        let current = self.epoch_start.ok_or(RelayStateError::NotInitialized)?;
        let mut base = self.epoch_start_for(first_height)?;
        let first_difficulty = base.header.difficulty(&self.constants);
        let mut crossed = None;

        for (offset, header) in headers.iter().enumerate() {
            let height = u32::try_from(offset)
                .ok()
                .and_then(|offset| first_height.checked_add(offset))
                .ok_or(RelayStateError::InvalidAncestorHeight(first_height))?;

            if offset > 0 && height % BLOCKS_PER_EPOCH == 0 {
                let valid = if height == current.height {
                    header.target() == current.header.target()
                } else {
                    is_within_retarget_bounds(&base.header.target(), &header.target())
                };
                if !valid {
                    return Err(ConsensusError::InvalidTarget { height }.into());
                }

                base = EpochStart {
                    height,
                    header: *header,
                };
                crossed = Some(base);
            } else if header.target() != base.header.target() {
                return Err(ConsensusError::InvalidTarget { height }.into());
            }
        }

        let last_difficulty = base.header.difficulty(&self.constants);
        let validated =
            validate_header_chain(headers, &first_difficulty, &last_difficulty, &self.constants)?;

        Ok((validated, crossed))
    }

    /// Extends the window with six headers built on the recorded block at
    /// `ancestor_height`. `headers` starts with that ancestor.
    pub fn add_headers(&mut self, ancestor_height: u32, headers: &[u8]) -> Result<(), SpvError> {
        let tip = self.tip()?;

        let headers = deserialize_chain(headers)?;
        if headers.len() != HEADERS_PER_BATCH {
            return Err(MalformedInputError::InvalidHeaderLength {
                expected: HEADERS_PER_BATCH,
                actual: headers.len(),
            }
            .into());
        }

        let recorded = self
            .recorded(ancestor_height)
            .ok_or(RelayStateError::AncestorNotRecorded(ancestor_height))?;
        if headers[0].compute_block_hash() != recorded {
            return Err(RelayStateError::InvalidAncestorBlock {
                height: ancestor_height,
                recorded,
            }
            .into());
        }

        let new_tip = ancestor_height
            .checked_add(HEADERS_PER_BATCH as u32 - 1)
            .ok_or(RelayStateError::InvalidAncestorHeight(ancestor_height))?;
        if new_tip <= tip {
            return Err(RelayStateError::InvalidAncestorHeight(ancestor_height).into());
        }

        let (validated, crossed) = self.check_headers(ancestor_height, &headers)?;

        for (height, header) in (ancestor_height..).zip(&headers).skip(1) {
            self.record(height, header.compute_block_hash());
        }
        self.tip_height = Some(new_tip);

        if let (Some(start), Some(current)) = (crossed, self.epoch_start) {
            if start.height > current.height {
                self.previous_epoch_start = Some(current);
                tracing::info!("Window relay entered the epoch starting at {}", start.height);
            }
            self.epoch_start = Some(start);
        }

        if ancestor_height < tip {
            tracing::info!(
                "Window relay reorganized above {}: tip {} -> {}",
                ancestor_height,
                tip,
                new_tip
            );
        } else {
            tracing::info!("Window relay advanced to {}", new_tip);
        }
        tracing::debug!(
            "New tip {}",
            spv_errors::display_hash(&validated.last_hash)
        );

        Ok(())
    }

    /// Whether `headers` is a valid chain whose fourth header is the block
    /// recorded at `height`.
    ///
    /// A header that is not (or no longer) recorded yields `Ok(false)`;
    /// malformed or invalid chains are errors.
    pub fn validate(&self, height: u32, headers: &[u8]) -> Result<bool, SpvError> {
        self.tip()?;

        let headers = deserialize_chain(headers)?;
        if headers.len() != VALIDATION_CHAIN_LENGTH {
            return Err(MalformedInputError::InvalidHeaderLength {
                expected: VALIDATION_CHAIN_LENGTH,
                actual: headers.len(),
            }
            .into());
        }

        let anchor = headers[VALIDATION_ANCHOR_INDEX].compute_block_hash();
        let (Some(first_height), Some(recorded)) = (
            height.checked_sub(VALIDATION_ANCHOR_INDEX as u32),
            self.recorded(height),
        ) else {
            tracing::debug!("No block recorded at height {}", height);
            return Ok(false);
        };
        if recorded != anchor {
            tracing::debug!(
                "Block {} is not the one recorded at height {}",
                spv_errors::display_hash(&anchor),
                height
            );
            return Ok(false);
        }

        self.check_headers(first_height, &headers)?;
        Ok(true)
    }

    pub fn get_height(&self) -> Result<u32, SpvError> {
        self.tip()
    }

    /// Height of the first block of the current epoch.
    pub fn get_epoch_start(&self) -> Result<u32, SpvError> {
        self.epoch_start
            .map(|start| start.height)
            .ok_or_else(|| RelayStateError::NotInitialized.into())
    }

    /// Oldest and newest height still recorded.
    pub fn get_relay_range(&self) -> Result<(u32, u32), SpvError> {
        let tip = self.tip()?;
        let window_start = tip.saturating_sub(self.slots.len() as u32 - 1);
        let oldest = self.genesis_height.map_or(window_start, |g| g.max(window_start));
        Ok((oldest, tip))
    }

    pub fn is_recorded(&self, height: u32, hash: &[u8; 32]) -> bool {
        self.recorded(height) == Some(*hash)
    }
}

impl ChainAnchor for WindowRelayState {
    fn epoch_difficulties(&self) -> Result<(U256, U256), SpvError> {
        let current = self.epoch_start.ok_or(RelayStateError::NotInitialized)?;
        let previous = self.previous_epoch_start.unwrap_or(current);
        Ok((
            previous.header.difficulty(&self.constants),
            current.header.difficulty(&self.constants),
        ))
    }

    fn network_constants(&self) -> NetworkConstants {
        self.constants
    }

    /// Places `headers` on the recorded chain through the first recorded hash
    /// among the first header's parent and the headers themselves. Every
    /// header at or below the tip must then be the recorded block at its
    /// height.
    ///
    /// # Errors
    ///
    /// - [`RelayStateError::AncestorNotRecorded`] if no header connects to
    ///   the window, or one at or below the tip has left it
    /// - [`RelayStateError::InvalidAncestorBlock`] if a header is not the
    ///   recorded block at its height, as for orphaned blocks
    fn check_anchor(&self, headers: &[BlockHeader]) -> Result<(), SpvError> {
        let tip = self.tip()?;
        let Some(first) = headers.first() else {
            return Ok(());
        };

        let first_height = std::iter::once(first.prev_block_hash)
            .chain(headers.iter().map(BlockHeader::compute_block_hash))
            .enumerate()
            .find_map(|(position, hash)| {
                let height = self.recorded_height(&hash)?.checked_add(1)?;
                height.checked_sub(u32::try_from(position).ok()?)
            })
            .ok_or(RelayStateError::AncestorNotRecorded(tip))?;

        for (height, header) in (first_height..=tip).zip(headers) {
            let recorded = self
                .recorded(height)
                .ok_or(RelayStateError::AncestorNotRecorded(height))?;
            if header.compute_block_hash() != recorded {
                return Err(RelayStateError::InvalidAncestorBlock { height, recorded }.into());
            }
        }

        Ok(())
    }
}

/// Shared handle to a [`WindowRelayState`].
#[derive(Debug, Clone)]
pub struct WindowRelay {
    state: Arc<RwLock<WindowRelayState>>,
}

impl WindowRelay {
    pub fn new(state: WindowRelayState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn from_config(window: &WindowConfig, relay: &RelayConfig) -> Result<Self, SpvError> {
        Ok(Self::new(WindowRelayState::from_config(window, relay)?))
    }

    pub async fn state(&self) -> RwLockReadGuard<'_, WindowRelayState> {
        self.state.read().await
    }

    pub async fn genesis(
        &self,
        caller: &str,
        epoch_start_header: &[u8],
        tip_header: &[u8],
        tip_height: u32,
    ) -> Result<(), SpvError> {
        self.state
            .write()
            .await
            .genesis(caller, epoch_start_header, tip_header, tip_height)
    }

    pub async fn add_headers(&self, ancestor_height: u32, headers: &[u8]) -> Result<(), SpvError> {
        self.state.write().await.add_headers(ancestor_height, headers)
    }

    pub async fn validate(&self, height: u32, headers: &[u8]) -> Result<bool, SpvError> {
        self.state.read().await.validate(height, headers)
    }

    pub async fn verify_proof(
        &self,
        proof: &SpvProof,
        config: &VerifierConfig,
    ) -> Result<ValidatedChain, SpvError> {
        crate::verifier::verify_proof(&*self.state.read().await, proof, config)
    }

    pub async fn get_height(&self) -> Result<u32, SpvError> {
        self.state.read().await.get_height()
    }

    pub async fn get_epoch_start(&self) -> Result<u32, SpvError> {
        self.state.read().await.get_epoch_start()
    }

    pub async fn get_relay_range(&self) -> Result<(u32, u32), SpvError> {
        self.state.read().await.get_relay_range()
    }

    pub async fn is_recorded(&self, height: u32, hash: &[u8; 32]) -> bool {
        self.state.read().await.is_recorded(height, hash)
    }
}
