pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Bootstrap error {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("Wallet derivation err: {underlying}")]
    WalletDerivation { underlying: String },

    #[error("Not enough balance: {balance}, required minimum: {required}")]
    InsufficientFunds { balance: String, required: String },

    #[error("Transfer err: {underlying}")]
    Submission { underlying: String },

    #[error("Ledger error {0}")]
    Ledger(#[from] LedgerError),

    #[error("Batch of {len} transfers is outside of the allowed range 1..={cap}")]
    InvalidBatch { len: usize, cap: usize },

    #[error("Invalid address {bad_value}: {underlying}")]
    InvalidAddress {
        bad_value: String,
        underlying: String,
    },

    #[error("Invalid amount {bad_value}: {reason}")]
    InvalidAmount { bad_value: String, reason: String },

    #[error("Failed to encode comment payload: {underlying}")]
    PayloadEncoding { underlying: String },

    #[error("Checkpoint error at {path}: {underlying}")]
    Checkpoint { path: String, underlying: String },

    #[error("In-flight limiter closed while launching burst units")]
    LimiterClosed,
}

impl Error {
    /// Errors after which the process cannot do anything useful.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Bootstrap(_) | Error::WalletDerivation { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Error::InsufficientFunds { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create API client: {underlying}")]
    CreateApiFailure { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Chain tip err: {underlying}")]
    ChainTipFetchFailed { underlying: String },

    #[error("Chain tip hash has {len} bytes, expected 32")]
    InvalidChainTip { len: usize },

    #[error("Failed to get account storage: {underlying}")]
    AccountStorageFetchFailed { underlying: String },

    #[error("Failed to decode encoded account state: {underlying}")]
    EncodedAccountStateDecodeFailed { underlying: String },
}
