//! In-memory [`BitcoinDataProvider`] backed by explicitly inserted blocks.

use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use bitcoin::hashes::Hash;
use bitcoin::{Transaction, Txid};
use spv_errors::ProviderError;
use spv_lib::common::hashes::reversed;
use spv_lib::header::BlockHeader;
use spv_lib::merkle::merkle_branch;

use crate::provider::{BitcoinDataProvider, Result, TransactionMerkleBranch};

#[derive(Debug, Clone)]
struct StoredBlock {
    header: BlockHeader,
    txids: Vec<Txid>,
}

/// Chain data held in memory. The tip is the highest inserted block.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    blocks: BTreeMap<u32, StoredBlock>,
    transactions: HashMap<Txid, (Transaction, u32)>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a block, replacing any block previously stored at `height`.
    pub fn insert_block(
        &mut self,
        height: u32,
        header: BlockHeader,
        transactions: Vec<Transaction>,
    ) {
        if let Some(replaced) = self.blocks.remove(&height) {
            for txid in replaced.txids {
                self.transactions.remove(&txid);
            }
        }

        let txids = transactions.iter().map(Transaction::compute_txid).collect();
        for tx in transactions {
            self.transactions.insert(tx.compute_txid(), (tx, height));
        }

        self.blocks.insert(height, StoredBlock { header, txids });
    }

    /// Inserts consecutive headers without transactions, the first at
    /// `start_height`.
    pub fn insert_headers(&mut self, start_height: u32, headers: &[BlockHeader]) {
        for (height, header) in (start_height..).zip(headers) {
            self.insert_block(height, *header, Vec::new());
        }
    }

    fn block(&self, height: u32) -> Result<&StoredBlock> {
        self.blocks
            .get(&height)
            .ok_or(ProviderError::BlockNotFound(height))
    }

    fn transaction_height(&self, tx_hash: &Txid) -> Result<u32> {
        self.transactions
            .get(tx_hash)
            .map(|(_, height)| *height)
            .ok_or_else(|| ProviderError::TransactionNotFound(tx_hash.to_string()))
    }

    fn tip(&self) -> Result<u32> {
        self.blocks
            .last_key_value()
            .map(|(height, _)| *height)
            .ok_or_else(|| eyre::eyre!("Provider holds no blocks").into())
    }
}

#[async_trait]
impl BitcoinDataProvider for InMemoryProvider {
    async fn latest_block_height(&self) -> Result<u32> {
        self.tip()
    }

    async fn get_transaction(&self, tx_hash: &Txid) -> Result<Transaction> {
        self.transactions
            .get(tx_hash)
            .map(|(tx, _)| tx.clone())
            .ok_or_else(|| ProviderError::TransactionNotFound(tx_hash.to_string()))
    }

    async fn get_transaction_confirmations(&self, tx_hash: &Txid) -> Result<u32> {
        let height = self.transaction_height(tx_hash)?;
        Ok(self.tip()?.saturating_sub(height) + 1)
    }

    async fn get_headers_chain(&self, start_height: u32, count: u32) -> Result<Vec<u8>> {
        let mut headers = Vec::with_capacity(count as usize * 80);
        for offset in 0..count {
            let height = start_height
                .checked_add(offset)
                .ok_or(ProviderError::BlockNotFound(u32::MAX))?;
            headers.extend_from_slice(&self.block(height)?.header.serialize());
        }
        Ok(headers)
    }

    async fn get_transaction_merkle(
        &self,
        tx_hash: &Txid,
        block_height: u32,
    ) -> Result<TransactionMerkleBranch> {
        let block = self.block(block_height)?;
        let position = block
            .txids
            .iter()
            .position(|txid| txid == tx_hash)
            .ok_or_else(|| ProviderError::TransactionNotFound(tx_hash.to_string()))?;

        let leaves: Vec<[u8; 32]> = block.txids.iter().map(|txid| txid.to_byte_array()).collect();
        let branch = merkle_branch(&leaves, position)
            .ok_or_else(|| ProviderError::TransactionNotFound(tx_hash.to_string()))?;

        Ok(TransactionMerkleBranch {
            block_height,
            merkle: branch.iter().map(reversed).collect(),
            position: position as u32,
        })
    }
}
