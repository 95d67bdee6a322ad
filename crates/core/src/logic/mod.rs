mod create_api;
mod derive_wallet;
mod dispatcher;
mod funding_check;
mod get_balance;
#[cfg(test)]
mod mock_ledger;
mod substrate_ledger;
mod transfer_payload;

pub use create_api::*;
pub use derive_wallet::*;
pub use funding_check::*;
pub use get_balance::*;
#[cfg(test)]
pub(crate) use mock_ledger::*;
pub use substrate_ledger::*;
pub use transfer_payload::*;
