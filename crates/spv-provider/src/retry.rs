//! Retry configuration and error handling for data provider calls.

use crate::provider::{BitcoinDataProvider, Result, TransactionMerkleBranch};
use async_trait::async_trait;
use bitcoin::{Transaction, Txid};
use spv_config::ProviderConfig;
use spv_errors::ProviderError;
use std::iter::Take;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;

/// Maximum retry attempts to prevent infinite loops.
const MAX_RETRY_ATTEMPTS: usize = 50;

/// Configuration for retry behavior with exponential backoff.
#[derive(Clone)]
pub struct RetryConfig {
    /// Initial delay in milliseconds before first retry.
    pub initial_delay_millis: u64,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Maximum number of retry attempts.
    pub max_attempts: usize,
    /// Backoff multiplier for exponential growth.
    pub backoff_multiplier: u64,
    /// Whether to add jitter to retry delays.
    pub is_jitter: bool,
    base_strategy: Arc<Take<ExponentialBackoff>>,
}

impl RetryConfig {
    pub fn new(
        initial_delay_millis: u64,
        max_delay: Duration,
        max_attempts: usize,
        backoff_multiplier: u64,
        is_jitter: bool,
    ) -> Self {
        // ExponentialBackoff yields base^n * factor, so the first delay is
        // backoff_multiplier * factor.
        let backoff_multiplier = backoff_multiplier.max(1);
        let factor = (initial_delay_millis / backoff_multiplier).max(1);
        let max_attempts = std::cmp::min(max_attempts, MAX_RETRY_ATTEMPTS);

        let base_strategy = Arc::new(
            ExponentialBackoff::from_millis(backoff_multiplier)
                .max_delay(max_delay)
                .factor(factor)
                .take(max_attempts),
        );

        Self {
            initial_delay_millis,
            max_delay,
            max_attempts,
            backoff_multiplier,
            is_jitter,
            base_strategy,
        }
    }

    /// Returns a fresh iterator over retry delays.
    pub fn get_strategy(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        let base_strategy = (*self.base_strategy).clone();

        if self.is_jitter {
            Box::new(base_strategy.map(jitter))
        } else {
            Box::new(base_strategy)
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        (&ProviderConfig::default()).into()
    }
}

impl From<&ProviderConfig> for RetryConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self::new(
            config.initial_delay_millis,
            Duration::from_secs(config.max_delay_secs),
            config.max_attempts,
            config.backoff_multiplier,
            config.jitter,
        )
    }
}

impl std::fmt::Debug for RetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryConfig")
            .field("initial_delay_millis", &self.initial_delay_millis)
            .field("max_delay", &self.max_delay)
            .field("max_attempts", &self.max_attempts)
            .field("backoff_multiplier", &self.backoff_multiplier)
            .field("is_jitter", &self.is_jitter)
            .finish()
    }
}

/// Trait to determine if an error is retryable.
pub trait RetryableError {
    /// Returns true if the operation should be retried for this error.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ProviderError {
    fn is_retryable(&self) -> bool {
        match self {
            // The chain has to move before these change.
            ProviderError::InsufficientConfirmations { .. } => false,
            ProviderError::TransactionNotFound(_) => false,
            ProviderError::BlockNotFound(_) => false,

            ProviderError::Other(err) => {
                let err_str = err.to_string().to_lowercase();
                err_str.contains("timeout")
                    || err_str.contains("timed out")
                    || err_str.contains("connection")
                    || err_str.contains("temporary")
                    || err_str.contains("busy")
                    || err_str.contains("unavailable")
                    || err_str.contains("network")
            }
        }
    }
}

/// Wraps a provider so that every call is retried on transient errors.
#[derive(Debug, Clone)]
pub struct RetryingProvider<P> {
    inner: P,
    retry_config: RetryConfig,
}

impl<P: BitcoinDataProvider> RetryingProvider<P> {
    pub fn new(inner: P, retry_config: RetryConfig) -> Self {
        Self {
            inner,
            retry_config,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }
}

fn should_retry(error: &ProviderError) -> bool {
    let retry = error.is_retryable();
    if retry {
        tracing::debug!("Data provider call failed, will retry: {}", error);
    } else {
        tracing::debug!("Non-retryable data provider error: {}", error);
    }
    retry
}

#[async_trait]
impl<P: BitcoinDataProvider> BitcoinDataProvider for RetryingProvider<P> {
    async fn latest_block_height(&self) -> Result<u32> {
        RetryIf::spawn(
            self.retry_config.get_strategy(),
            || self.inner.latest_block_height(),
            should_retry,
        )
        .await
    }

    async fn get_transaction(&self, tx_hash: &Txid) -> Result<Transaction> {
        RetryIf::spawn(
            self.retry_config.get_strategy(),
            || self.inner.get_transaction(tx_hash),
            should_retry,
        )
        .await
    }

    async fn get_transaction_confirmations(&self, tx_hash: &Txid) -> Result<u32> {
        RetryIf::spawn(
            self.retry_config.get_strategy(),
            || self.inner.get_transaction_confirmations(tx_hash),
            should_retry,
        )
        .await
    }

    async fn get_headers_chain(&self, start_height: u32, count: u32) -> Result<Vec<u8>> {
        RetryIf::spawn(
            self.retry_config.get_strategy(),
            || self.inner.get_headers_chain(start_height, count),
            should_retry,
        )
        .await
    }

    async fn get_transaction_merkle(
        &self,
        tx_hash: &Txid,
        block_height: u32,
    ) -> Result<TransactionMerkleBranch> {
        RetryIf::spawn(
            self.retry_config.get_strategy(),
            || self.inner.get_transaction_merkle(tx_hash, block_height),
            should_retry,
        )
        .await
    }
}
