mod secret_phrase;
mod wallet_key_pair;
mod wallet_signer;

pub use secret_phrase::*;
pub use wallet_key_pair::*;
pub use wallet_signer::*;
