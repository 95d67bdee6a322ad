use crate::prelude::*;

/// Progress of a run, mutated only by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RunState {
    #[getset(get = "pub")]
    mode: DispatchMode,

    #[getset(get = "pub")]
    total_count: u64,

    /// Sends still owed. Burst mode never truncates a cohort, so this may end
    /// up below zero.
    #[getset(get = "pub")]
    remaining: i64,

    #[getset(get = "pub")]
    submissions: u64,

    #[getset(get = "pub")]
    transfers_sent: u64,

    #[getset(get = "pub")]
    failed_units: u64,

    #[getset(get = "pub")]
    last_batch_index: Option<u64>,
}

impl RunState {
    pub fn new(mode: DispatchMode, total_count: u64) -> Self {
        Self {
            mode,
            total_count,
            remaining: i64::try_from(total_count).unwrap_or(i64::MAX),
            submissions: 0,
            transfers_sent: 0,
            failed_units: 0,
            last_batch_index: None,
        }
    }

    pub fn resumed(checkpoint: &Checkpoint) -> Self {
        Self {
            remaining: *checkpoint.remaining(),
            last_batch_index: *checkpoint.last_batch_index(),
            ..Self::new(*checkpoint.mode(), *checkpoint.total_count())
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// The owed count as a batch size, `None` once exhausted.
    pub fn remaining_sends(&self) -> Option<usize> {
        usize::try_from(self.remaining).ok().filter(|r| *r > 0)
    }

    pub(crate) fn record_success(&mut self, transfers: usize) {
        let transfers = transfers as u64;
        self.remaining = self
            .remaining
            .saturating_sub(i64::try_from(transfers).unwrap_or(i64::MAX));
        self.submissions += 1;
        self.transfers_sent += transfers;
        self.last_batch_index = Some(self.last_batch_index.map_or(0, |i| i + 1));
    }

    pub(crate) fn record_failure(&mut self) {
        self.failed_units += 1;
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::builder()
            .mode(self.mode)
            .total_count(self.total_count)
            .remaining(self.remaining)
            .maybe_last_batch_index(self.last_batch_index)
            .build()
    }
}
