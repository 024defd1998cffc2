use async_trait::async_trait;
use bitcoin::{Transaction, Txid};
use spv_errors::ProviderError;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Merkle branch of a transaction as reported by a data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionMerkleBranch {
    /// Height of the block containing the transaction.
    pub block_height: u32,
    /// Siblings in display byte order, deepest first.
    pub merkle: Vec<[u8; 32]>,
    /// Position of the transaction in the block.
    pub position: u32,
}

/// Source of raw chain data for assembling SPV proofs.
#[async_trait]
pub trait BitcoinDataProvider: Send + Sync {
    /// Height of the chain tip.
    async fn latest_block_height(&self) -> Result<u32>;

    /// Full transaction with the given hash.
    async fn get_transaction(&self, tx_hash: &Txid) -> Result<Transaction>;

    /// Number of confirmations of a transaction, 1 when it is in the tip.
    async fn get_transaction_confirmations(&self, tx_hash: &Txid) -> Result<u32>;

    /// `count` consecutive serialized headers starting at `start_height`,
    /// concatenated.
    async fn get_headers_chain(&self, start_height: u32, count: u32) -> Result<Vec<u8>>;

    /// Merkle branch of a transaction in the block at `block_height`.
    async fn get_transaction_merkle(
        &self,
        tx_hash: &Txid,
        block_height: u32,
    ) -> Result<TransactionMerkleBranch>;
}
