use std::{future::Future, sync::Arc};

use subxt::{
    config::polkadot::PolkadotExtrinsicParamsBuilder as TxParams,
    utils::{AccountId32, H256},
};
use tokio::sync::Mutex;

use crate::prelude::*;

pub type Nonce = u64;

/// Hands out consecutive nonces for one account.
///
/// A nonce is only kept as used if the work it was reserved for succeeded.
/// Any failure drops the counter, so the next reservation asks the node again
/// instead of leaving a gap that would park every later transaction.
#[derive(Debug, Default)]
struct NonceCounter {
    next: Mutex<Option<Nonce>>,
}

impl NonceCounter {
    async fn reserve<F>(&self, fetch: F) -> Result<Nonce>
    where
        F: Future<Output = Result<Nonce>>,
    {
        let mut next = self.next.lock().await;
        let nonce = match *next {
            Some(nonce) => nonce,
            None => {
                let fetched = fetch.await?;
                debug!("Fetched nonce: {fetched}");
                fetched
            }
        };
        *next = Some(nonce + 1);
        Ok(nonce)
    }

    async fn forget(&self) {
        *self.next.lock().await = None;
    }

    /// Runs `work` with a freshly reserved nonce.
    async fn with_nonce<T, F, W, Fut>(&self, fetch: F, work: W) -> Result<T>
    where
        F: Future<Output = Result<Nonce>>,
        W: FnOnce(Nonce) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let nonce = self.reserve(fetch).await?;
        let outcome = work(nonce).await;
        if outcome.is_err() {
            debug!("Nonce {nonce} not used, refetching on next submission");
            self.forget().await;
        }
        outcome
    }
}

fn submission_error(e: impl std::fmt::Debug) -> Error {
    Error::Submission {
        underlying: e.to_debug_string(),
    }
}

/// [`LedgerClient`] and [`WalletHandle`] backed by a live node.
///
/// Nonces are handed out locally so that concurrent submissions from the same
/// account do not race for the same one.
#[derive(Clone)]
pub struct SubstrateLedger {
    api: Api,
    signer: WalletSigner,
    nonces: Arc<NonceCounter>,
}

impl SubstrateLedger {
    pub fn new(api: Api, signer: WalletSigner) -> Self {
        Self {
            api,
            signer,
            nonces: Arc::new(NonceCounter::default()),
        }
    }

    async fn fetch_nonce(&self) -> Result<Nonce> {
        self.api
            .tx()
            .account_nonce(self.signer.account_id())
            .await
            .map_err(submission_error)
    }

    async fn sign(
        &self,
        batch: &Batch,
        nonce: Nonce,
    ) -> Result<subxt::tx::SubmittableTransaction<PolkadotConfig, Api>> {
        let payload = batch_payload(batch)?;
        let tx_params = TxParams::new().nonce(nonce).build();
        self.api
            .tx()
            .create_signed(&payload, &self.signer, tx_params)
            .await
            .map_err(submission_error)
    }
}

fn tip_hash(tip: &ChainTip) -> Result<H256, LedgerError> {
    <[u8; 32]>::try_from(tip.hash().as_slice())
        .map(H256)
        .map_err(|_| LedgerError::InvalidChainTip {
            len: tip.hash().len(),
        })
}

/// SS58 rendering of the all-zero account.
pub fn null_account_address() -> Address {
    Address::from(AccountId32([0; 32]).to_string())
}

#[async_trait]
impl LedgerClient for SubstrateLedger {
    async fn chain_tip(&self) -> Result<ChainTip> {
        let block = self
            .api
            .blocks()
            .at_latest()
            .await
            .map_err(|e| LedgerError::ChainTipFetchFailed {
                underlying: e.to_debug_string(),
            })?;
        Ok(ChainTip::builder()
            .number(block.number().into())
            .hash(block.hash().0.to_vec())
            .build())
    }

    async fn balance(&self, address: &Address, tip: &ChainTip) -> Result<Amount> {
        let account_id = parse_account_id(address)?;
        let at = tip_hash(tip)?;
        Ok(get_free_balance(&self.api, &account_id, at).await?)
    }

    async fn submit(&self, batch: Batch) -> Result<TxHash> {
        self.nonces
            .with_nonce(self.fetch_nonce(), |nonce| async move {
                let tx = self.sign(&batch, nonce).await?;
                let hash = tx.submit().await.map_err(submission_error)?;
                Ok(TxHash::from(hash.0))
            })
            .await
    }

    async fn submit_and_confirm(&self, batch: Batch) -> Result<TxHash> {
        self.nonces
            .with_nonce(self.fetch_nonce(), |nonce| async move {
                let tx = self.sign(&batch, nonce).await?;
                let events = tx
                    .submit_and_watch()
                    .await
                    .map_err(submission_error)?
                    .wait_for_finalized_success()
                    .await
                    .map_err(submission_error)?;
                Ok(TxHash::from(events.extrinsic_hash().0))
            })
            .await
    }
}

impl WalletHandle for SubstrateLedger {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn null_address(&self) -> Address {
        null_account_address()
    }
}
