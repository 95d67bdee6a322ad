use crate::prelude::*;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMode {
    /// Batches of up to `batch_cap` transfers, one batch at a time.
    #[display("sequential-batched")]
    SequentialBatched,

    /// One self transfer at a time, each waited for on chain.
    #[display("sequential-single")]
    SequentialSingle,

    /// Cohorts of concurrent sub-batches, not waited for on chain.
    #[display("concurrent-burst")]
    ConcurrentBurst,
}

impl DispatchMode {
    /// Minimum wallet balance, in whole units, checked before each unit of work.
    pub fn default_min_balance(&self) -> &'static str {
        match self {
            DispatchMode::SequentialBatched => "0.6",
            DispatchMode::SequentialSingle => "0.015",
            DispatchMode::ConcurrentBurst => "0.014",
        }
    }

    pub fn default_confirmation(&self) -> ConfirmationPolicy {
        match self {
            DispatchMode::SequentialSingle => ConfirmationPolicy::Finalized,
            DispatchMode::SequentialBatched | DispatchMode::ConcurrentBurst => {
                ConfirmationPolicy::Accepted
            }
        }
    }

    pub fn default_destination(&self) -> Destination {
        match self {
            DispatchMode::SequentialBatched => Destination::Null,
            DispatchMode::SequentialSingle | DispatchMode::ConcurrentBurst => {
                Destination::OwnWallet
            }
        }
    }
}

/// How long a submission is waited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfirmationPolicy {
    /// Return as soon as the node accepted the transaction and handed out its hash.
    #[display("accepted")]
    Accepted,

    /// Return once the transaction is finalized on chain.
    #[display("finalized")]
    Finalized,
}

/// When burst mode stops launching cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPolicy {
    /// Stop once the launched transfers cover the requested count. A cohort
    /// that was started is always launched in full.
    #[default]
    RequestedCount,

    /// Stop after this many cohorts.
    Cohorts(u64),

    /// Keep launching until the process is terminated.
    Never,
}

impl StopPolicy {
    pub fn should_stop(&self, requested: u64, cohorts_launched: u64, transfers_launched: u64) -> bool {
        match self {
            StopPolicy::RequestedCount => transfers_launched >= requested,
            StopPolicy::Cohorts(limit) => cohorts_launched >= *limit,
            StopPolicy::Never => false,
        }
    }
}
