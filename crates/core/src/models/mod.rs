mod address;
mod amount;
mod batch;
mod chain_tip;
mod checkpoint;
mod comment_payload;
mod destination;
mod dispatch_mode;
mod dispatch_parameters;
mod dispatcher;
mod error;
mod polkadot;
mod run_state;
mod traits;
mod transfer_request;
mod tx_hash;

pub use address::*;
pub use amount::*;
pub use batch::*;
pub use chain_tip::*;
pub use checkpoint::*;
pub use comment_payload::*;
pub use destination::*;
pub use dispatch_mode::*;
pub use dispatch_parameters::*;
pub use dispatcher::*;
pub use error::*;
pub use polkadot::*;
pub use run_state::*;
pub use traits::*;
pub use transfer_request::*;
pub use tx_hash::*;
