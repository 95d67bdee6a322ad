use std::sync::Arc;

use tokio::sync::{
    mpsc::{self, UnboundedReceiver, UnboundedSender},
    OwnedSemaphorePermit, Semaphore,
};

use crate::prelude::*;

use super::submit_with_policy;

/// What a burst unit reports back to the coordinating loop.
struct UnitOutcome {
    cohort: u64,
    unit: usize,
    transfers: usize,
    result: Result<TxHash>,
}

impl<L, W> Dispatcher<L, W>
where
    L: LedgerClient + 'static,
    W: WalletHandle,
{
    /// Launches cohorts of independent units until the stop policy says so.
    ///
    /// Units never touch the run state; they send their outcome over a channel
    /// and this loop, the only owner of the state, records it.
    pub(super) async fn run_concurrent_burst(&mut self) -> Result<()> {
        let burst = self.parameters().burst().clone();
        let requested = u64::try_from(*self.state().remaining()).unwrap_or(0);
        let limiter = Arc::new(Semaphore::new(*burst.max_in_flight()));
        let (outcome_sender, mut outcome_receiver) = mpsc::unbounded_channel();

        let mut cohorts_launched = 0u64;
        let mut transfers_launched = 0u64;
        let should_stop = |cohorts: u64, transfers: u64| {
            burst
                .stop_policy()
                .should_stop(requested, cohorts, transfers)
        };

        while !should_stop(cohorts_launched, transfers_launched) {
            info!(
                "Launching cohort #{cohorts_launched} of {} units x {} transfers",
                burst.cohort_size(),
                burst.sub_batch_size()
            );
            for unit in 0..*burst.cohort_size() {
                let permit = Arc::clone(&limiter)
                    .acquire_owned()
                    .await
                    .map_err(|_| Error::LimiterClosed)?;
                self.spawn_unit(cohorts_launched, unit, permit, outcome_sender.clone());
                transfers_launched += *burst.sub_batch_size() as u64;
                self.drain_ready_outcomes(&mut outcome_receiver).await;
            }
            cohorts_launched += 1;

            if !burst.cohort_interval().is_zero()
                && !should_stop(cohorts_launched, transfers_launched)
            {
                tokio::time::sleep(*burst.cohort_interval()).await;
            }
            self.drain_ready_outcomes(&mut outcome_receiver).await;
        }

        drop(outcome_sender);
        while let Some(outcome) = outcome_receiver.recv().await {
            self.record_unit_outcome(outcome).await;
        }
        info!(
            "Burst finished after {cohorts_launched} cohorts: {} submissions, {} transfers sent, {} units failed, {} remaining",
            self.state().submissions(),
            self.state().transfers_sent(),
            self.state().failed_units(),
            self.state().remaining()
        );
        Ok(())
    }

    fn spawn_unit(
        &self,
        cohort: u64,
        unit: usize,
        permit: OwnedSemaphorePermit,
        outcomes: UnboundedSender<UnitOutcome>,
    ) {
        let ledger = Arc::clone(self.ledger());
        let address = self.wallet().address();
        let required = *self.parameters().min_balance();
        let denomination = self.parameters().denomination().clone();
        let confirmation = *self.parameters().confirmation();
        let request = self.transfer_request();
        let transfers = *self.parameters().burst().sub_batch_size();

        tokio::spawn(async move {
            let result = async {
                check_funding(ledger.as_ref(), &address, required, &denomination).await?;
                let batch = Batch::repeated(request, transfers, transfers)?;
                submit_with_policy(ledger.as_ref(), batch, confirmation).await
            }
            .await;
            drop(permit);

            let outcome = UnitOutcome {
                cohort,
                unit,
                transfers,
                result,
            };
            if outcomes.send(outcome).is_err() {
                debug!("Coordinator gone, dropping outcome of unit {cohort}.{unit}");
            }
        });
    }

    async fn drain_ready_outcomes(&mut self, receiver: &mut UnboundedReceiver<UnitOutcome>) {
        while let Ok(outcome) = receiver.try_recv() {
            self.record_unit_outcome(outcome).await;
        }
    }

    async fn record_unit_outcome(&mut self, outcome: UnitOutcome) {
        let UnitOutcome {
            cohort,
            unit,
            transfers,
            result,
        } = outcome;
        match result {
            Ok(hash) => {
                self.log_submission(&hash);
                self.state_mut().record_success(transfers);
                self.save_checkpoint().await;
                debug!(
                    "Unit {cohort}.{unit} sent {transfers} transfers, {} remaining",
                    self.state().remaining()
                );
            }
            Err(e) if e.is_insufficient_funds() => {
                warn!("Unit {cohort}.{unit} skipped: {e}");
                self.state_mut().record_failure();
            }
            Err(e) => {
                error!("Unit {cohort}.{unit} failed: {e}");
                self.state_mut().record_failure();
            }
        }
    }
}
