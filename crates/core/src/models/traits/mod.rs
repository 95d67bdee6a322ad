mod ledger_client;
mod to_debug_string;
mod wallet_handle;

pub use ledger_client::*;
pub use to_debug_string::*;
pub use wallet_handle::*;
