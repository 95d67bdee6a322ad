use crate::prelude::*;

impl<L, W> Dispatcher<L, W>
where
    L: LedgerClient + 'static,
    W: WalletHandle,
{
    pub(super) async fn run_sequential_batched(&mut self) -> Result<()> {
        let batch_cap = *self.parameters().batch_cap();
        while let Some(remaining) = self.state().remaining_sends() {
            let chunk = remaining.min(batch_cap);
            let batch = Batch::repeated(self.transfer_request(), chunk, batch_cap)?;

            self.ensure_funded()
                .await
                .inspect_err(|e| error!("Funding check failed: {e}"))?;

            info!("Sending {chunk} transactions");
            self.submit_unit(batch).await?;
            info!(
                "Sent {chunk} transactions, {} remaining",
                self.state().remaining()
            );
        }
        Ok(())
    }

    pub(super) async fn run_sequential_single(&mut self) -> Result<()> {
        while self.state().remaining_sends().is_some() {
            self.ensure_funded()
                .await
                .inspect_err(|e| error!("Funding check failed: {e}"))?;

            let batch = Batch::repeated(self.transfer_request(), 1, 1)?;
            self.submit_unit(batch).await?;
            info!(
                "Sent transaction {} of {}",
                self.state().transfers_sent(),
                self.state().total_count()
            );
        }
        Ok(())
    }

    async fn submit_unit(&mut self, batch: Batch) -> Result<()> {
        let transfers = batch.len();
        match self.submit(batch).await {
            Ok(hash) => {
                self.log_submission(&hash);
                self.state_mut().record_success(transfers);
                self.save_checkpoint().await;
                Ok(())
            }
            Err(e) => {
                error!("Error sending messages: {e}");
                self.state_mut().record_failure();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    fn batched() -> DispatchParameters {
        mock_parameters(DispatchMode::SequentialBatched, BurstParameters::default())
    }

    fn single() -> DispatchParameters {
        mock_parameters(DispatchMode::SequentialSingle, BurstParameters::default())
    }

    #[tokio::test]
    async fn batched_250_sends_100_100_50() {
        let mut dispatcher = mock_dispatcher(MockLedger::funded(FUNDED), batched(), 250);
        dispatcher.run().await.unwrap();

        let ledger = dispatcher.ledger();
        assert_eq!(ledger.successful_sizes(), vec![100, 100, 50]);
        assert_eq!(*dispatcher.state().remaining(), 0);
        assert_eq!(*dispatcher.state().transfers_sent(), 250);
        assert_eq!(ledger.balance_reads(), 3);
        assert!(ledger.submissions().iter().all(|s| {
            s.confirmation == ConfirmationPolicy::Accepted
                && s.destinations.iter().all(|d| d.as_str() == MOCK_NULL)
        }));
    }

    #[tokio::test]
    async fn batched_issues_ceil_of_count_over_cap() {
        for count in [0u64, 1, 99, 100, 101, 999, 1000] {
            let mut dispatcher = mock_dispatcher(MockLedger::funded(FUNDED), batched(), count);
            dispatcher.run().await.unwrap();

            let sizes = dispatcher.ledger().successful_sizes();
            assert_eq!(sizes.len() as u64, count.div_ceil(100), "count {count}");
            assert_eq!(sizes.iter().sum::<usize>() as u64, count);
            assert!(sizes.iter().all(|s| *s <= 100));
            assert_eq!(*dispatcher.state().remaining(), 0);
        }
    }

    #[tokio::test]
    async fn batched_respects_custom_cap() {
        let parameters = DispatchParameters::builder()
            .mode(DispatchMode::SequentialBatched)
            .batch_cap(4)
            .min_balance(Amount::from_base_units(100))
            .confirmation(ConfirmationPolicy::Accepted)
            .destination(Destination::Account(Address::from("friend")))
            .build();
        let mut dispatcher = mock_dispatcher(MockLedger::funded(FUNDED), parameters, 10);
        dispatcher.run().await.unwrap();

        let ledger = dispatcher.ledger();
        assert_eq!(ledger.successful_sizes(), vec![4, 4, 2]);
        assert!(ledger.submissions()[0]
            .destinations
            .iter()
            .all(|d| d.as_str() == "friend"));
    }

    #[tokio::test]
    async fn batched_funding_failure_stops_the_run() {
        let ledger = MockLedger::funded(FUNDED).with_scripted_balances([FUNDED, UNDERFUNDED]);
        let mut dispatcher = mock_dispatcher(ledger, batched(), 250);

        let error = dispatcher.run().await.unwrap_err();
        assert!(error.is_insufficient_funds());
        assert_eq!(dispatcher.ledger().successful_sizes(), vec![100]);
        assert_eq!(dispatcher.ledger().attempts(), 1);
        assert_eq!(*dispatcher.state().remaining(), 150);
    }

    #[tokio::test]
    async fn batched_submission_failure_is_not_retried() {
        let ledger = MockLedger::funded(FUNDED).with_failing_submissions([1]);
        let mut dispatcher = mock_dispatcher(ledger, batched(), 250);

        let error = dispatcher.run().await.unwrap_err();
        assert!(matches!(error, Error::Submission { .. }));
        assert_eq!(dispatcher.ledger().attempts(), 2);
        assert_eq!(dispatcher.ledger().successful_sizes(), vec![100]);
        assert_eq!(*dispatcher.state().remaining(), 150);
        assert_eq!(*dispatcher.state().failed_units(), 1);
    }

    #[tokio::test]
    async fn single_sends_one_self_transfer_at_a_time() {
        let ledger = MockLedger::funded(FUNDED).with_submission_delay(Duration::from_millis(5));
        let mut dispatcher = mock_dispatcher(ledger, single(), 7);
        dispatcher.run().await.unwrap();

        let ledger = dispatcher.ledger();
        assert_eq!(ledger.successful_sizes(), vec![1; 7]);
        assert_eq!(ledger.max_in_flight(), 1);
        assert!(ledger.submissions().iter().all(|s| {
            s.confirmation == ConfirmationPolicy::Finalized
                && s.destinations == vec![Address::from(MOCK_OWNER)]
        }));
        assert_eq!(*dispatcher.state().remaining(), 0);
    }

    #[tokio::test]
    async fn single_third_funding_check_fails() {
        let ledger =
            MockLedger::funded(FUNDED).with_scripted_balances([FUNDED, FUNDED, UNDERFUNDED]);
        let mut dispatcher = mock_dispatcher(ledger, single(), 5);

        let error = dispatcher.run().await.unwrap_err();
        assert!(error.is_insufficient_funds());
        assert_eq!(dispatcher.ledger().successful_sizes(), vec![1, 1]);
        assert_eq!(dispatcher.ledger().balance_reads(), 3);
        assert_eq!(*dispatcher.state().remaining(), 3);
    }

    #[tokio::test]
    async fn unreachable_ledger_aborts_before_submitting() {
        let ledger = MockLedger::funded(FUNDED).with_unreachable_chain_tip();
        let mut dispatcher = mock_dispatcher(ledger, single(), 5);

        assert!(matches!(
            dispatcher.run().await,
            Err(Error::Ledger(LedgerError::ChainTipFetchFailed { .. }))
        ));
        assert_eq!(dispatcher.ledger().attempts(), 0);
        assert_eq!(*dispatcher.state().remaining(), 5);
    }

    #[tokio::test]
    async fn checkpoint_follows_each_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.json");

        let parameters = DispatchParameters::builder()
            .mode(DispatchMode::SequentialBatched)
            .min_balance(Amount::from_base_units(100))
            .confirmation(ConfirmationPolicy::Accepted)
            .destination(Destination::Null)
            .checkpoint_path(path.clone())
            .build();
        let ledger = MockLedger::funded(FUNDED).with_failing_submissions([2]);
        let mut dispatcher = mock_dispatcher(ledger, parameters, 250);
        assert!(dispatcher.run().await.is_err());

        let checkpoint = Checkpoint::load(&path).unwrap().unwrap();
        assert_eq!(*checkpoint.remaining(), 50);
        assert_eq!(*checkpoint.last_batch_index(), Some(1));
        assert!(checkpoint.is_resumable_for(DispatchMode::SequentialBatched));

        let ledger = MockLedger::funded(FUNDED);
        let mut resumed = mock_dispatcher(ledger, batched(), 0);
        *resumed.state_mut() = RunState::resumed(&checkpoint);
        resumed.run().await.unwrap();
        assert_eq!(resumed.ledger().successful_sizes(), vec![50]);
        assert_eq!(*resumed.state().last_batch_index(), Some(2));
    }
}
