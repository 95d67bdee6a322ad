use crate::prelude::*;

/// The ledger the dispatcher submits to.
///
/// Implementations are shared between concurrently running burst units, hence
/// the `Send + Sync` bound: the client must tolerate concurrent calls.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The latest block, balances are read against it.
    async fn chain_tip(&self) -> Result<ChainTip>;

    async fn balance(&self, address: &Address, tip: &ChainTip) -> Result<Amount>;

    /// Submits `batch` as one transaction and returns once the node accepted it.
    async fn submit(&self, batch: Batch) -> Result<TxHash>;

    /// Submits `batch` as one transaction and returns once it is finalized.
    async fn submit_and_confirm(&self, batch: Batch) -> Result<TxHash>;
}
