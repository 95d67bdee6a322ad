use std::{path::PathBuf, time::Duration};

use crate::prelude::*;

pub const DEFAULT_COHORT_SIZE: usize = 50;
pub const DEFAULT_SUB_BATCH_SIZE: usize = 4;
pub const DEFAULT_COHORT_INTERVAL: Duration = Duration::from_secs(4);
pub const DEFAULT_MAX_IN_FLIGHT: usize = 200;

/// Settings only used by [`DispatchMode::ConcurrentBurst`].
#[derive(Debug, Clone, Getters, Builder)]
pub struct BurstParameters {
    #[getset(get = "pub")]
    #[builder(default = DEFAULT_COHORT_SIZE)]
    cohort_size: usize,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_SUB_BATCH_SIZE)]
    sub_batch_size: usize,

    /// Pause between two cohorts, zero disables pacing.
    #[getset(get = "pub")]
    #[builder(default = DEFAULT_COHORT_INTERVAL)]
    cohort_interval: Duration,

    /// Upper bound on units waiting for the ledger at the same time.
    #[getset(get = "pub")]
    #[builder(default = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,

    #[getset(get = "pub")]
    #[builder(default)]
    stop_policy: StopPolicy,
}

impl Default for BurstParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Getters, Builder)]
pub struct DispatchParameters {
    #[getset(get = "pub")]
    mode: DispatchMode,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_BATCH_CAP)]
    batch_cap: usize,

    /// Funding floor checked before every unit of work.
    #[getset(get = "pub")]
    min_balance: Amount,

    #[getset(get = "pub")]
    confirmation: ConfirmationPolicy,

    #[getset(get = "pub")]
    destination: Destination,

    #[getset(get = "pub")]
    #[builder(default)]
    transfer_amount: Amount,

    #[getset(get = "pub")]
    #[builder(default)]
    burst: BurstParameters,

    #[getset(get = "pub")]
    #[builder(default)]
    denomination: Denomination,

    /// Progress is persisted here after each successful submission.
    #[getset(get = "pub")]
    checkpoint_path: Option<PathBuf>,

    /// Prefix of the explorer link logged for every submission.
    #[getset(get = "pub")]
    explorer_url: Option<String>,
}

pub type Api = OnlineClient<PolkadotConfig>;
