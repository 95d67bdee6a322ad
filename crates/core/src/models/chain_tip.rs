use crate::prelude::*;

/// The block balances are read at.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct ChainTip {
    #[getset(get = "pub")]
    number: u64,

    #[getset(get = "pub")]
    hash: Vec<u8>,
}
