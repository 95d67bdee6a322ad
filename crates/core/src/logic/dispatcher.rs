use crate::prelude::*;

mod dispatcher_burst;
mod dispatcher_sequential;

impl<L, W> Dispatcher<L, W>
where
    L: LedgerClient + 'static,
    W: WalletHandle,
{
    /// Dispatches the remaining sends in the configured mode.
    ///
    /// Sequential modes stop at the first failed funding check or submission
    /// and return its error, leaving `remaining` where it was. Burst mode only
    /// skips the failed unit.
    pub async fn run(&mut self) -> Result<()> {
        let mode = *self.parameters().mode();
        info!(
            "Dispatching {} transfers from {} in {mode} mode",
            self.state().remaining(),
            self.wallet().address()
        );
        match mode {
            DispatchMode::SequentialBatched => self.run_sequential_batched().await,
            DispatchMode::SequentialSingle => self.run_sequential_single().await,
            DispatchMode::ConcurrentBurst => self.run_concurrent_burst().await,
        }
    }

    fn transfer_request(&self) -> TransferRequest {
        let wallet = self.wallet().as_ref();
        let destination = self.parameters().destination().resolve(wallet);
        wallet.build_transfer(
            destination,
            *self.parameters().transfer_amount(),
            self.payload().clone(),
        )
    }

    async fn ensure_funded(&self) -> Result<Amount> {
        check_funding(
            self.ledger().as_ref(),
            &self.wallet().address(),
            *self.parameters().min_balance(),
            self.parameters().denomination(),
        )
        .await
    }

    async fn submit(&self, batch: Batch) -> Result<TxHash> {
        submit_with_policy(self.ledger().as_ref(), batch, *self.parameters().confirmation()).await
    }

    fn log_submission(&self, hash: &TxHash) {
        info!("transaction sent, hash: {hash}");
        if let Some(explorer_url) = self.parameters().explorer_url() {
            info!("explorer link: {}", hash.explorer_link(explorer_url));
        }
    }

    /// Persists the run state off the runtime threads, the write ends with an
    /// fsync.
    async fn save_checkpoint(&self) {
        let Some(path) = self.parameters().checkpoint_path().clone() else {
            return;
        };
        let checkpoint = self.state().checkpoint();
        match tokio::task::spawn_blocking(move || checkpoint.save(&path)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Progress not persisted: {e}"),
            Err(e) => warn!("Progress not persisted, writer task failed: {e}"),
        }
    }
}

async fn submit_with_policy<L>(
    ledger: &L,
    batch: Batch,
    confirmation: ConfirmationPolicy,
) -> Result<TxHash>
where
    L: LedgerClient + ?Sized,
{
    match confirmation {
        ConfirmationPolicy::Accepted => ledger.submit(batch).await,
        ConfirmationPolicy::Finalized => ledger.submit_and_confirm(batch).await,
    }
}
