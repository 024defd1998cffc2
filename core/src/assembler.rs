//! # Proof Assembler
//!
//! Builds the [`SpvProof`] for a confirmed transaction out of data fetched
//! from a [`BitcoinDataProvider`]: the block containing the transaction, the
//! headers confirming it and its Merkle branch.

use bitcoin::hashes::Hash;
use bitcoin::{Transaction, Txid};
use spv_config::ProviderConfig;
use spv_errors::{ProviderError, SpvError};
use spv_lib::common::hashes::reversed;
use spv_lib::proof::{serialize_merkle_proof, SpvProof};
use spv_provider::{BitcoinDataProvider, RetryConfig, RetryingProvider};

/// A transaction together with the proof of its inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProof {
    pub transaction: Transaction,
    pub proof: SpvProof,
}

#[derive(Debug, Clone)]
pub struct ProofAssembler<P> {
    provider: P,
    required_confirmations: u32,
}

impl<P: BitcoinDataProvider> ProofAssembler<RetryingProvider<P>> {
    /// Assembler whose provider calls are retried with exponential backoff.
    pub fn with_retries(provider: P, config: &ProviderConfig, required_confirmations: u32) -> Self {
        Self::new(
            RetryingProvider::new(provider, RetryConfig::from(config)),
            required_confirmations,
        )
    }
}

impl<P: BitcoinDataProvider> ProofAssembler<P> {
    pub fn new(provider: P, required_confirmations: u32) -> Self {
        Self {
            provider,
            required_confirmations,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Assembles the proof for `txid`.
    ///
    /// The header chain starts at the block containing the transaction and
    /// holds exactly `required_confirmations` headers.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::InsufficientConfirmations`] if the transaction is
    ///   not buried deep enough yet
    /// - Any provider failure, after retries when the provider retries
    pub async fn assemble(&self, txid: &Txid) -> Result<AssembledProof, SpvError> {
        let required = self.required_confirmations;

        let transaction = self.provider.get_transaction(txid).await?;
        let confirmations = self.provider.get_transaction_confirmations(txid).await?;
        if confirmations < required {
            return Err(ProviderError::InsufficientConfirmations {
                required,
                actual: confirmations,
            }
            .into());
        }

        let latest_height = self.provider.latest_block_height().await?;
        let tx_block_height = (latest_height + 1)
            .checked_sub(confirmations)
            .ok_or_else(|| {
                ProviderError::Other(eyre::eyre!(
                    "Transaction {txid} has {confirmations} confirmations above tip {latest_height}"
                ))
            })?;

        tracing::debug!(
            "Assembling proof for {} in block {} with {} headers",
            txid,
            tx_block_height,
            required
        );

        let (bitcoin_headers, branch) = futures::try_join!(
            self.provider.get_headers_chain(tx_block_height, required),
            self.provider.get_transaction_merkle(txid, tx_block_height),
        )?;

        if branch.block_height != tx_block_height {
            return Err(ProviderError::Other(eyre::eyre!(
                "Merkle branch of {txid} is for block {}, expected {tx_block_height}",
                branch.block_height
            ))
            .into());
        }

        let siblings: Vec<[u8; 32]> = branch.merkle.iter().map(reversed).collect();

        Ok(AssembledProof {
            transaction,
            proof: SpvProof {
                tx_hash: txid.to_byte_array(),
                merkle_proof: serialize_merkle_proof(&siblings),
                tx_index_in_block: branch.position,
                bitcoin_headers,
            },
        })
    }
}
