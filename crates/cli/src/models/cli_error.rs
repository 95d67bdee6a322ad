use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("Batch cap must be positive")]
    BatchCapMustBePositive,

    #[error("Cohort size must be positive")]
    CohortSizeMustBePositive,

    #[error("Sub-batch size must be positive")]
    SubBatchSizeMustBePositive,

    #[error("Max in flight must be positive")]
    MaxInFlightMustBePositive,

    #[error("Max cohorts must be positive")]
    MaxCohortsMustBePositive,

    #[error("Invalid minimum balance `{bad_value}`: {underlying}")]
    MinBalanceInvalid { bad_value: String, underlying: Error },

    #[error("Invalid transfer amount `{bad_value}`: {underlying}")]
    TransferAmountInvalid { bad_value: String, underlying: Error },

    #[error("Invalid destination `{bad_value}`: {underlying}")]
    DestinationInvalid { bad_value: String, underlying: Error },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),

    #[error("Console input err: {0}")]
    ConsoleInput(#[from] std::io::Error),

    #[error("Invalid number of transactions `{bad_value}`")]
    InvalidCount { bad_value: String },
}

impl CliError {
    /// Errors that end the process with a failure status.
    pub fn is_fatal(&self) -> bool {
        match self {
            CliError::CoreError(e) => e.is_fatal(),
            CliError::InvalidCliArgs(_) | CliError::ConsoleInput(_) => true,
            CliError::InvalidCount { .. } => false,
        }
    }
}
