//! # Epoch-Difficulty Relay
//!
//! Tracks the proof-of-work difficulty of every epoch since a trusted genesis
//! epoch. Anyone may extend the history by one epoch at a time with a header
//! chain that straddles the next retarget boundary.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --genesis--> Ready --retarget--> Ready (one more epoch)
//! ```
//!
//! ## Retarget Proofs
//!
//! A retarget proof is exactly `2 * proof_length` headers. The header at index
//! `proof_length` is the first block of the new epoch:
//!
//! - headers before it must carry the current epoch's target,
//! - it and every header after it must carry one new target,
//! - the new target must differ from the current one by at most a factor of
//!   four in either direction,
//! - the first block of the new epoch must be younger than the first block of
//!   the current one,
//! - the whole chain must pass header chain validation with the current and
//!   the new difficulty.
//!
//! The new difficulty is read from the boundary header; it is bounded but not
//! recomputed from block times.

use std::collections::HashSet;
use std::sync::Arc;

use crypto_bigint::U256;
use spv_config::{RelayConfig, VerifierConfig};
use spv_errors::{
    AuthorizationError, ConsensusError, MalformedInputError, RelayStateError, SpvError,
};
use spv_lib::common::constants::{
    epoch_of, epoch_start_height, NetworkConstants, BLOCKS_PER_EPOCH,
};
use spv_lib::header::{deserialize_chain, is_within_retarget_bounds, BlockHeader};
use spv_lib::header_chain::{validate_header_chain, ValidatedChain};
use spv_lib::proof::SpvProof;
use tokio::sync::{RwLock, RwLockReadGuard};

use super::ChainAnchor;

/// Fewest headers `validate_chain` accepts.
pub const MIN_CHAIN_LENGTH: usize = 3;

/// Difficulty facts of one proven epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochRecord {
    pub epoch: u32,
    pub target: U256,
    pub difficulty: U256,
    /// Timestamp of the first block of the epoch.
    pub timestamp: u32,
}

/// State changes of an [`EpochRelayState`], in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    Genesis {
        height: u32,
    },
    Retarget {
        old_difficulty: U256,
        new_difficulty: U256,
    },
    ProofLengthChanged {
        new_length: usize,
    },
    AuthorizationRequirementChanged {
        required: bool,
    },
    SubmitterAuthorized {
        submitter: String,
    },
    SubmitterDeauthorized {
        submitter: String,
    },
}

#[derive(Debug, Clone)]
pub struct EpochRelayState {
    constants: NetworkConstants,
    governance: String,
    proof_length: usize,
    authorization_required: bool,
    authorized_submitters: HashSet<String>,
    /// Proven epochs, genesis first. Empty before genesis.
    epochs: Vec<EpochRecord>,
    events: Vec<RelayEvent>,
}

impl EpochRelayState {
    pub fn new(constants: NetworkConstants, governance: impl Into<String>) -> Self {
        Self {
            constants,
            governance: governance.into(),
            proof_length: 0,
            authorization_required: false,
            authorized_submitters: HashSet::new(),
            epochs: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Creates an uninitialized relay with the configured network, governance
    /// and initial authorizations. The configured proof length is meant to be
    /// passed to [`Self::genesis`].
    pub fn from_config(config: &RelayConfig) -> Self {
        let mut state = Self::new(
            NetworkConstants::for_network(config.network),
            config.governance.clone(),
        );
        state.authorization_required = config.authorization_required;
        state.authorized_submitters = config.authorized_submitters.iter().cloned().collect();
        state
    }

    fn only_governance(&self, caller: &str) -> Result<(), SpvError> {
        if caller != self.governance {
            tracing::warn!("Rejected governance call from {}", caller);
            return Err(AuthorizationError::NotGovernance(caller.to_string()).into());
        }
        Ok(())
    }

    fn latest(&self) -> Result<&EpochRecord, SpvError> {
        self.epochs
            .last()
            .ok_or_else(|| RelayStateError::NotInitialized.into())
    }

    /// Bootstraps the relay from a trusted header at an epoch boundary.
    ///
    /// The header's proof of work is not checked: its height and chain
    /// membership are a trust assumption of the deployment.
    pub fn genesis(
        &mut self,
        caller: &str,
        genesis_header: &[u8],
        genesis_height: u32,
        genesis_proof_length: usize,
    ) -> Result<(), SpvError> {
        self.only_governance(caller)?;
        if self.is_ready() {
            return Err(RelayStateError::AlreadyInitialized.into());
        }

        let header = BlockHeader::deserialize(genesis_header)?;
        if genesis_height % BLOCKS_PER_EPOCH != 0 {
            return Err(RelayStateError::InvalidGenesisHeight(genesis_height).into());
        }
        check_proof_length(genesis_proof_length)?;

        let record = EpochRecord {
            epoch: epoch_of(genesis_height),
            target: header.target(),
            difficulty: header.difficulty(&self.constants),
            timestamp: header.time,
        };
        self.epochs.push(record);
        self.proof_length = genesis_proof_length;
        self.events.push(RelayEvent::Genesis {
            height: genesis_height,
        });

        tracing::info!(
            "Relay genesis at height {} (epoch {}), difficulty {}",
            genesis_height,
            record.epoch,
            record.difficulty
        );

        Ok(())
    }

    /// Proves the difficulty of the epoch after the latest known one and
    /// returns it.
    pub fn retarget(&mut self, submitter: &str, headers: &[u8]) -> Result<U256, SpvError> {
        let current = *self.latest()?;

        if self.authorization_required && !self.authorized_submitters.contains(submitter) {
            tracing::warn!("Rejected retarget from unauthorized submitter {}", submitter);
            return Err(AuthorizationError::SubmitterUnauthorized(submitter.to_string()).into());
        }

        let headers = deserialize_chain(headers)?;
        let expected = self.proof_length * 2;
        if headers.len() != expected {
            return Err(MalformedInputError::InvalidHeaderLength {
                expected,
                actual: headers.len(),
            }
            .into());
        }

        let (old_epoch, new_epoch) = headers.split_at(self.proof_length);
        for (index, header) in old_epoch.iter().enumerate() {
            if header.target() != current.target {
                return Err(ConsensusError::InvalidTargetInPreHeaders { index }.into());
            }
        }

        let boundary = new_epoch[0];
        let boundary_index = self.proof_length;
        let new_target = boundary.target();
        for (offset, header) in new_epoch.iter().enumerate() {
            if header.target() != new_target {
                return Err(ConsensusError::InvalidTargetInNewEpoch {
                    index: boundary_index + offset,
                }
                .into());
            }
        }

        if new_target == current.target
            || !is_within_retarget_bounds(&current.target, &new_target)
            || boundary.time <= current.timestamp
        {
            return Err(ConsensusError::InvalidTargetInNewEpoch {
                index: boundary_index,
            }
            .into());
        }

        let new_difficulty = boundary.difficulty(&self.constants);
        validate_header_chain(
            &headers,
            &current.difficulty,
            &new_difficulty,
            &self.constants,
        )?;

        let record = EpochRecord {
            epoch: current.epoch + 1,
            target: new_target,
            difficulty: new_difficulty,
            timestamp: boundary.time,
        };
        self.epochs.push(record);
        self.events.push(RelayEvent::Retarget {
            old_difficulty: current.difficulty,
            new_difficulty,
        });

        tracing::info!(
            "Retarget to epoch {} by {}: difficulty {} -> {}",
            record.epoch,
            submitter,
            current.difficulty,
            new_difficulty
        );

        Ok(new_difficulty)
    }

    /// Validates a header chain against the epoch its first header belongs
    /// to and returns the first header's hash and the number of headers.
    pub fn validate_chain(&self, headers: &[u8]) -> Result<([u8; 32], usize), SpvError> {
        self.latest()?;

        let headers = deserialize_chain(headers)?;
        let max_length = self.proof_length * 2;
        let violated = if headers.len() < MIN_CHAIN_LENGTH {
            Some(MIN_CHAIN_LENGTH)
        } else if headers.len() > max_length {
            Some(max_length)
        } else {
            None
        };
        if let Some(expected) = violated {
            return Err(MalformedInputError::InvalidHeaderLength {
                expected,
                actual: headers.len(),
            }
            .into());
        }

        let (previous, current) = self.difficulties_at(headers[0].time)?;
        let validated = validate_header_chain(&headers, &previous, &current, &self.constants)?;

        tracing::debug!(
            "Validated chain of {} headers starting at {}",
            validated.header_count,
            spv_errors::display_hash(&validated.first_hash)
        );

        Ok((validated.first_hash, validated.header_count))
    }

    /// Difficulties a chain starting at `timestamp` may use.
    fn difficulties_at(&self, timestamp: u32) -> Result<(U256, U256), SpvError> {
        let mut records = self.epochs.iter().rev();
        let current = records.next().ok_or(RelayStateError::NotInitialized)?;
        if timestamp >= current.timestamp {
            return Ok((current.difficulty, current.difficulty));
        }

        match (records.next(), self.epochs.first()) {
            (Some(previous), _) if timestamp >= previous.timestamp => {
                Ok((previous.difficulty, current.difficulty))
            }
            (_, Some(genesis)) if timestamp < genesis.timestamp => {
                Err(RelayStateError::EpochBeforeGenesis(genesis.epoch.saturating_sub(1)).into())
            }
            _ => Err(RelayStateError::ChainTooOld.into()),
        }
    }

    pub fn get_epoch_difficulty(&self, epoch: u32) -> Result<U256, SpvError> {
        let genesis = self.epochs.first().ok_or(RelayStateError::NotInitialized)?;
        if epoch < genesis.epoch {
            return Err(RelayStateError::EpochBeforeGenesis(epoch).into());
        }

        self.epochs
            .get((epoch - genesis.epoch) as usize)
            .map(|record| record.difficulty)
            .ok_or_else(|| RelayStateError::EpochNotProven(epoch).into())
    }

    /// Difficulty of the epoch containing `height`.
    pub fn get_block_difficulty(&self, height: u32) -> Result<U256, SpvError> {
        self.get_epoch_difficulty(epoch_of(height))
    }

    /// Zero before genesis.
    pub fn get_current_epoch_difficulty(&self) -> U256 {
        self.epochs
            .last()
            .map_or(U256::ZERO, |record| record.difficulty)
    }

    /// Zero until the first retarget.
    pub fn get_prev_epoch_difficulty(&self) -> U256 {
        self.epochs
            .len()
            .checked_sub(2)
            .and_then(|index| self.epochs.get(index))
            .map_or(U256::ZERO, |record| record.difficulty)
    }

    pub fn get_current_and_prev_epoch_difficulty(&self) -> (U256, U256) {
        (
            self.get_current_epoch_difficulty(),
            self.get_prev_epoch_difficulty(),
        )
    }

    /// First and last height whose difficulty the relay can prove.
    pub fn get_relay_range(&self) -> (u32, u32) {
        match (self.epochs.first(), self.epochs.last()) {
            (Some(genesis), Some(current)) => (
                epoch_start_height(genesis.epoch),
                epoch_start_height(current.epoch).saturating_add(BLOCKS_PER_EPOCH - 1),
            ),
            _ => (0, BLOCKS_PER_EPOCH - 1),
        }
    }

    pub fn set_proof_length(&mut self, caller: &str, new_length: usize) -> Result<(), SpvError> {
        self.only_governance(caller)?;
        self.latest()?;
        check_proof_length(new_length)?;
        if new_length == self.proof_length {
            return Err(RelayStateError::InvalidProofLength(new_length).into());
        }

        self.proof_length = new_length;
        self.events.push(RelayEvent::ProofLengthChanged { new_length });
        tracing::info!("Proof length changed to {}", new_length);

        Ok(())
    }

    pub fn set_authorization_status(
        &mut self,
        caller: &str,
        required: bool,
    ) -> Result<(), SpvError> {
        self.only_governance(caller)?;

        self.authorization_required = required;
        self.events
            .push(RelayEvent::AuthorizationRequirementChanged { required });
        tracing::info!("Submitter authorization required: {}", required);

        Ok(())
    }

    pub fn authorize(&mut self, caller: &str, submitter: &str) -> Result<(), SpvError> {
        self.only_governance(caller)?;

        self.authorized_submitters.insert(submitter.to_string());
        self.events.push(RelayEvent::SubmitterAuthorized {
            submitter: submitter.to_string(),
        });
        tracing::info!("Submitter {} authorized", submitter);

        Ok(())
    }

    pub fn deauthorize(&mut self, caller: &str, submitter: &str) -> Result<(), SpvError> {
        self.only_governance(caller)?;

        self.authorized_submitters.remove(submitter);
        self.events.push(RelayEvent::SubmitterDeauthorized {
            submitter: submitter.to_string(),
        });
        tracing::info!("Submitter {} deauthorized", submitter);

        Ok(())
    }

    pub fn is_authorized(&self, submitter: &str) -> bool {
        self.authorized_submitters.contains(submitter)
    }

    pub fn authorization_required(&self) -> bool {
        self.authorization_required
    }

    pub fn is_ready(&self) -> bool {
        !self.epochs.is_empty()
    }

    pub fn proof_length(&self) -> usize {
        self.proof_length
    }

    pub fn genesis_epoch(&self) -> Option<u32> {
        self.epochs.first().map(|record| record.epoch)
    }

    pub fn current_epoch(&self) -> Option<u32> {
        self.epochs.last().map(|record| record.epoch)
    }

    pub fn epochs(&self) -> &[EpochRecord] {
        &self.epochs
    }

    /// Removes and returns the events recorded so far.
    pub fn take_events(&mut self) -> Vec<RelayEvent> {
        std::mem::take(&mut self.events)
    }
}

fn check_proof_length(proof_length: usize) -> Result<(), SpvError> {
    if proof_length == 0 || proof_length >= BLOCKS_PER_EPOCH as usize {
        return Err(RelayStateError::InvalidProofLength(proof_length).into());
    }
    Ok(())
}

impl ChainAnchor for EpochRelayState {
    fn epoch_difficulties(&self) -> Result<(U256, U256), SpvError> {
        self.latest()?;
        Ok((
            self.get_prev_epoch_difficulty(),
            self.get_current_epoch_difficulty(),
        ))
    }

    fn network_constants(&self) -> NetworkConstants {
        self.constants
    }
}

/// Shared handle to an [`EpochRelayState`]. Mutations take the write lock and
/// queries the read lock.
#[derive(Debug, Clone)]
pub struct EpochRelay {
    state: Arc<RwLock<EpochRelayState>>,
}

impl EpochRelay {
    pub fn new(state: EpochRelayState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(EpochRelayState::from_config(config))
    }

    /// Read access for queries not forwarded below.
    pub async fn state(&self) -> RwLockReadGuard<'_, EpochRelayState> {
        self.state.read().await
    }

    pub async fn genesis(
        &self,
        caller: &str,
        genesis_header: &[u8],
        genesis_height: u32,
        genesis_proof_length: usize,
    ) -> Result<(), SpvError> {
        self.state.write().await.genesis(
            caller,
            genesis_header,
            genesis_height,
            genesis_proof_length,
        )
    }

    pub async fn retarget(&self, submitter: &str, headers: &[u8]) -> Result<U256, SpvError> {
        self.state.write().await.retarget(submitter, headers)
    }

    pub async fn validate_chain(&self, headers: &[u8]) -> Result<([u8; 32], usize), SpvError> {
        self.state.read().await.validate_chain(headers)
    }

    /// Verifies a full SPV proof against the relay's current difficulties.
    pub async fn verify_proof(
        &self,
        proof: &SpvProof,
        config: &VerifierConfig,
    ) -> Result<ValidatedChain, SpvError> {
        crate::verifier::verify_proof(&*self.state.read().await, proof, config)
    }

    pub async fn set_proof_length(&self, caller: &str, new_length: usize) -> Result<(), SpvError> {
        self.state.write().await.set_proof_length(caller, new_length)
    }

    pub async fn set_authorization_status(
        &self,
        caller: &str,
        required: bool,
    ) -> Result<(), SpvError> {
        self.state
            .write()
            .await
            .set_authorization_status(caller, required)
    }

    pub async fn authorize(&self, caller: &str, submitter: &str) -> Result<(), SpvError> {
        self.state.write().await.authorize(caller, submitter)
    }

    pub async fn deauthorize(&self, caller: &str, submitter: &str) -> Result<(), SpvError> {
        self.state.write().await.deauthorize(caller, submitter)
    }

    pub async fn is_authorized(&self, submitter: &str) -> bool {
        self.state.read().await.is_authorized(submitter)
    }

    pub async fn get_epoch_difficulty(&self, epoch: u32) -> Result<U256, SpvError> {
        self.state.read().await.get_epoch_difficulty(epoch)
    }

    pub async fn get_block_difficulty(&self, height: u32) -> Result<U256, SpvError> {
        self.state.read().await.get_block_difficulty(height)
    }

    pub async fn get_current_epoch_difficulty(&self) -> U256 {
        self.state.read().await.get_current_epoch_difficulty()
    }

    pub async fn get_prev_epoch_difficulty(&self) -> U256 {
        self.state.read().await.get_prev_epoch_difficulty()
    }

    pub async fn get_current_and_prev_epoch_difficulty(&self) -> (U256, U256) {
        self.state.read().await.get_current_and_prev_epoch_difficulty()
    }

    pub async fn get_relay_range(&self) -> (u32, u32) {
        self.state.read().await.get_relay_range()
    }

    pub async fn take_events(&self) -> Vec<RelayEvent> {
        self.state.write().await.take_events()
    }
}
