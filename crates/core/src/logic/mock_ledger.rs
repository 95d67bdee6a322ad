use std::{
    collections::{HashSet, VecDeque},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use crate::prelude::*;

pub(crate) const MOCK_OWNER: &str = "owner";
pub(crate) const MOCK_NULL: &str = "null";

/// Balance every mock funding check passes with under [`mock_parameters`].
pub(crate) const FUNDED: Amount = Amount::from_base_units(1_000);
/// Balance below the minimum of [`mock_parameters`].
pub(crate) const UNDERFUNDED: Amount = Amount::from_base_units(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedSubmission {
    pub(crate) size: usize,
    pub(crate) confirmation: ConfirmationPolicy,
    pub(crate) destinations: Vec<Address>,
    pub(crate) succeeded: bool,
}

/// In-memory ledger and wallet recording every call made to it.
pub(crate) struct MockLedger {
    balance: Amount,
    scripted_balances: Mutex<VecDeque<Amount>>,
    chain_tip_reachable: bool,
    failing_submissions: HashSet<usize>,
    submission_delay: Duration,
    balance_reads: AtomicUsize,
    submission_attempts: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    submissions: Mutex<Vec<RecordedSubmission>>,
}

impl MockLedger {
    pub(crate) fn funded(balance: Amount) -> Self {
        Self {
            balance,
            scripted_balances: Mutex::new(VecDeque::new()),
            chain_tip_reachable: true,
            failing_submissions: HashSet::new(),
            submission_delay: Duration::ZERO,
            balance_reads: AtomicUsize::new(0),
            submission_attempts: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Balances returned by the first reads, before falling back to the
    /// funded balance.
    pub(crate) fn with_scripted_balances(self, balances: impl IntoIterator<Item = Amount>) -> Self {
        *self.scripted_balances.lock().unwrap() = balances.into_iter().collect();
        self
    }

    /// Submission attempts (zero based, in call order) that are rejected.
    pub(crate) fn with_failing_submissions(mut self, attempts: impl IntoIterator<Item = usize>) -> Self {
        self.failing_submissions = attempts.into_iter().collect();
        self
    }

    pub(crate) fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submission_delay = delay;
        self
    }

    pub(crate) fn with_unreachable_chain_tip(mut self) -> Self {
        self.chain_tip_reachable = false;
        self
    }

    pub(crate) fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub(crate) fn successful_sizes(&self) -> Vec<usize> {
        self.submissions()
            .into_iter()
            .filter(|s| s.succeeded)
            .map(|s| s.size)
            .collect()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.submission_attempts.load(Ordering::SeqCst)
    }

    pub(crate) fn balance_reads(&self) -> usize {
        self.balance_reads.load(Ordering::SeqCst)
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn record(&self, batch: Batch, confirmation: ConfirmationPolicy) -> Result<TxHash> {
        let attempt = self.submission_attempts.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        if !self.submission_delay.is_zero() {
            tokio::time::sleep(self.submission_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let succeeded = !self.failing_submissions.contains(&attempt);
        self.submissions.lock().unwrap().push(RecordedSubmission {
            size: batch.len(),
            confirmation,
            destinations: batch.iter().map(|r| r.destination().clone()).collect(),
            succeeded,
        });
        if succeeded {
            Ok(TxHash::from(attempt.to_le_bytes().to_vec()))
        } else {
            Err(Error::Submission {
                underlying: format!("mock rejected submission #{attempt}"),
            })
        }
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn chain_tip(&self) -> Result<ChainTip> {
        if !self.chain_tip_reachable {
            return Err(LedgerError::ChainTipFetchFailed {
                underlying: "mock node unreachable".to_owned(),
            }
            .into());
        }
        Ok(ChainTip::builder().number(1).hash(vec![0; 32]).build())
    }

    async fn balance(&self, _address: &Address, _tip: &ChainTip) -> Result<Amount> {
        self.balance_reads.fetch_add(1, Ordering::SeqCst);
        let scripted = self.scripted_balances.lock().unwrap().pop_front();
        Ok(scripted.unwrap_or(self.balance))
    }

    async fn submit(&self, batch: Batch) -> Result<TxHash> {
        self.record(batch, ConfirmationPolicy::Accepted).await
    }

    async fn submit_and_confirm(&self, batch: Batch) -> Result<TxHash> {
        self.record(batch, ConfirmationPolicy::Finalized).await
    }
}

impl WalletHandle for MockLedger {
    fn address(&self) -> Address {
        Address::from(MOCK_OWNER)
    }

    fn null_address(&self) -> Address {
        Address::from(MOCK_NULL)
    }
}

/// Mode defaults with a minimum balance between [`UNDERFUNDED`] and [`FUNDED`].
pub(crate) fn mock_parameters(mode: DispatchMode, burst: BurstParameters) -> DispatchParameters {
    DispatchParameters::builder()
        .mode(mode)
        .min_balance(Amount::from_base_units(100))
        .confirmation(mode.default_confirmation())
        .destination(mode.default_destination())
        .burst(burst)
        .build()
}

pub(crate) fn mock_dispatcher(
    ledger: MockLedger,
    parameters: DispatchParameters,
    total_count: u64,
) -> Dispatcher<MockLedger, MockLedger> {
    let ledger = Arc::new(ledger);
    let mode = *parameters.mode();
    Dispatcher::builder()
        .ledger(Arc::clone(&ledger))
        .wallet(ledger)
        .parameters(parameters)
        .payload(CommentPayload::new("mint"))
        .state(RunState::new(mode, total_count))
        .build()
}
