//! # Relays
//!
//! Stateful stores of Bitcoin proof-of-work facts that proofs are checked
//! against.
//!
//! - [`epoch`]: per-epoch difficulty history, extended by retarget proofs.
//! - [`window`]: a bounded ring buffer of recent header hashes, extended in
//!   fixed batches and absorbing reorgs by overwriting.
//!
//! Both keep their state in a plain struct with synchronous methods and expose
//! a cloneable service handle that guards the state with a reader/writer lock.

use crypto_bigint::U256;
use spv_errors::SpvError;
use spv_lib::common::constants::NetworkConstants;
use spv_lib::header::BlockHeader;

pub mod epoch;
pub mod window;

pub use epoch::{EpochRecord, EpochRelay, EpochRelayState, RelayEvent};
pub use window::{WindowRelay, WindowRelayState};

/// Source of the difficulties a proof's header chain is validated against.
pub trait ChainAnchor {
    /// Previous and current epoch difficulties, in that order.
    ///
    /// # Errors
    ///
    /// Fails when the anchor does not know any difficulty yet.
    fn epoch_difficulties(&self) -> Result<(U256, U256), SpvError>;

    /// Network whose reference target defines difficulty.
    fn network_constants(&self) -> NetworkConstants;

    /// Checks that `headers` belong to the chain the anchor follows.
    ///
    /// Anchors that only track difficulties accept any chain.
    fn check_anchor(&self, _headers: &[BlockHeader]) -> Result<(), SpvError> {
        Ok(())
    }
}
