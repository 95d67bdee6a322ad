use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::prelude::*;

pub const BINARY_NAME: &str = "minter";
pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:9944";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Batches of up to `--batch-cap` transfers to the null account.
    Batched,
    /// One finalized self transfer at a time.
    Single,
    /// Cohorts of concurrent sub-batches.
    Burst,
}

impl From<ModeArg> for DispatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Batched => DispatchMode::SequentialBatched,
            ModeArg::Single => DispatchMode::SequentialSingle,
            ModeArg::Burst => DispatchMode::ConcurrentBurst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfirmationArg {
    Accepted,
    Finalized,
}

impl From<ConfirmationArg> for ConfirmationPolicy {
    fn from(confirmation: ConfirmationArg) -> Self {
        match confirmation {
            ConfirmationArg::Accepted => ConfirmationPolicy::Accepted,
            ConfirmationArg::Finalized => ConfirmationPolicy::Finalized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StopArg {
    /// Stop once the launched transfers cover `--count`.
    RequestedCount,
    /// Run until interrupted.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Sr25519,
    Ed25519,
}

impl From<SchemeArg> for WalletScheme {
    fn from(scheme: SchemeArg) -> Self {
        match scheme {
            SchemeArg::Sr25519 => WalletScheme::Sr25519,
            SchemeArg::Ed25519 => WalletScheme::Ed25519,
        }
    }
}

/// Mints inscriptions by sending comment-carrying transfers from one wallet.
///
/// Prompts for the wallet's seed phrase (or generates a new wallet) and for
/// the number of transfers, checks the wallet balance before every unit of
/// work and submits the transfers in the selected mode. Amounts are given in
/// whole units, e.g. `--min-balance 0.6`.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// Websocket URL of the node to submit to.
    #[arg(long, default_value_t = DEFAULT_NODE_URL.to_owned())]
    node_url: String,

    #[arg(long, value_enum, default_value_t = ModeArg::Batched)]
    mode: ModeArg,

    /// Number of transfers to send, prompted for when absent.
    #[arg(long)]
    count: Option<u64>,

    /// Most transfers in one batched submission.
    #[arg(long, default_value_t = DEFAULT_BATCH_CAP)]
    batch_cap: usize,

    /// Balance required before each unit of work, defaults per mode.
    #[arg(long)]
    min_balance: Option<String>,

    /// Value of every transfer.
    #[arg(long, default_value = "0")]
    transfer_amount: String,

    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals: u8,

    #[arg(long, default_value_t = DEFAULT_SYMBOL.to_owned())]
    symbol: String,

    /// Defaults to `finalized` in single mode and `accepted` otherwise.
    #[arg(long, value_enum)]
    confirmation: Option<ConfirmationArg>,

    /// `own`, `null` or an account address; defaults to `null` in batched
    /// mode and `own` otherwise.
    #[arg(long)]
    destination: Option<String>,

    #[arg(long, value_enum, default_value_t = SchemeArg::Sr25519)]
    scheme: SchemeArg,

    /// Burst units launched per cohort.
    #[arg(long, default_value_t = DEFAULT_COHORT_SIZE)]
    cohort_size: usize,

    /// Transfers in each burst unit.
    #[arg(long, default_value_t = DEFAULT_SUB_BATCH_SIZE)]
    sub_batch_size: usize,

    /// Pause between two cohorts, 0 disables pacing.
    #[arg(long, default_value_t = DEFAULT_COHORT_INTERVAL.as_millis() as u64)]
    cohort_interval_ms: u64,

    /// Most burst units waiting for the node at once.
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,

    #[arg(long, value_enum, default_value_t = StopArg::RequestedCount)]
    stop: StopArg,

    /// Stop burst mode after this many cohorts, overrides `--stop`.
    #[arg(long)]
    max_cohorts: Option<u64>,

    /// File progress is saved to and resumed from.
    #[arg(long)]
    checkpoint: Option<PathBuf>,

    /// Prefix for the explorer link logged with every transaction hash.
    #[arg(long)]
    explorer_url: Option<String>,

    #[arg(long, default_value_t = DEFAULT_PROTOCOL.to_owned())]
    protocol: String,

    #[arg(long, default_value_t = DEFAULT_TICK.to_owned())]
    tick: String,

    #[arg(long, default_value_t = DEFAULT_MINT_AMOUNT.to_owned())]
    mint_amount: String,

    /// Log the wallet's seed phrase.
    #[arg(long, default_value_t = false)]
    reveal_seed: bool,
}

/// Everything a run needs, validated.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub node_url: Url,
    pub scheme: WalletScheme,
    pub reveal_seed: bool,
    pub count: Option<u64>,
    pub parameters: DispatchParameters,
    pub inscription: MintInscription,
}

impl CliArgs {
    fn stop_policy(&self) -> Result<StopPolicy, InvalidCliArgs> {
        match (self.max_cohorts, self.stop) {
            (Some(0), _) => Err(InvalidCliArgs::MaxCohortsMustBePositive),
            (Some(limit), _) => Ok(StopPolicy::Cohorts(limit)),
            (None, StopArg::RequestedCount) => Ok(StopPolicy::RequestedCount),
            (None, StopArg::Never) => Ok(StopPolicy::Never),
        }
    }

    fn burst_parameters(&self) -> Result<BurstParameters, InvalidCliArgs> {
        if self.cohort_size == 0 {
            return Err(InvalidCliArgs::CohortSizeMustBePositive);
        }
        if self.sub_batch_size == 0 {
            return Err(InvalidCliArgs::SubBatchSizeMustBePositive);
        }
        if self.max_in_flight == 0 {
            return Err(InvalidCliArgs::MaxInFlightMustBePositive);
        }
        Ok(BurstParameters::builder()
            .cohort_size(self.cohort_size)
            .sub_batch_size(self.sub_batch_size)
            .cohort_interval(Duration::from_millis(self.cohort_interval_ms))
            .max_in_flight(self.max_in_flight)
            .stop_policy(self.stop_policy()?)
            .build())
    }
}

impl TryFrom<CliArgs> for RunSettings {
    type Error = InvalidCliArgs;

    fn try_from(cli_args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(node_url) = Url::parse(&cli_args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: cli_args.node_url.clone(),
            });
        };
        if cli_args.batch_cap == 0 {
            return Err(InvalidCliArgs::BatchCapMustBePositive);
        }
        let burst = cli_args.burst_parameters()?;

        let mode = DispatchMode::from(cli_args.mode);
        let denomination = Denomination::builder()
            .decimals(cli_args.decimals)
            .symbol(cli_args.symbol.clone())
            .build();

        let min_balance = cli_args
            .min_balance
            .as_deref()
            .unwrap_or(mode.default_min_balance());
        let min_balance =
            denomination
                .parse(min_balance)
                .map_err(|e| InvalidCliArgs::MinBalanceInvalid {
                    bad_value: min_balance.to_owned(),
                    underlying: e,
                })?;
        let transfer_amount = denomination
            .parse(&cli_args.transfer_amount)
            .map_err(|e| InvalidCliArgs::TransferAmountInvalid {
                bad_value: cli_args.transfer_amount.clone(),
                underlying: e,
            })?;
        let destination = match cli_args.destination.as_deref() {
            None => mode.default_destination(),
            Some(value) => {
                value
                    .parse()
                    .map_err(|e| InvalidCliArgs::DestinationInvalid {
                        bad_value: value.to_owned(),
                        underlying: e,
                    })?
            }
        };
        let confirmation = cli_args
            .confirmation
            .map(ConfirmationPolicy::from)
            .unwrap_or(mode.default_confirmation());

        let parameters = DispatchParameters::builder()
            .mode(mode)
            .batch_cap(cli_args.batch_cap)
            .min_balance(min_balance)
            .confirmation(confirmation)
            .destination(destination)
            .transfer_amount(transfer_amount)
            .burst(burst)
            .denomination(denomination)
            .maybe_checkpoint_path(cli_args.checkpoint.clone())
            .maybe_explorer_url(cli_args.explorer_url.clone())
            .build();

        let inscription = MintInscription::builder()
            .protocol(cli_args.protocol.clone())
            .tick(cli_args.tick.clone())
            .amount(cli_args.mint_amount.clone())
            .build();

        Ok(RunSettings {
            node_url,
            scheme: cli_args.scheme.into(),
            reveal_seed: cli_args.reveal_seed,
            count: cli_args.count,
            parameters,
            inscription,
        })
    }
}
