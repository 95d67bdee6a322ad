use std::sync::Arc;

use getset::MutGetters;

use crate::prelude::*;

/// Turns a requested send count into submissions against a [`LedgerClient`].
#[derive(Getters, MutGetters, Builder)]
pub struct Dispatcher<L, W> {
    #[getset(get = "pub")]
    ledger: Arc<L>,

    #[getset(get = "pub")]
    wallet: Arc<W>,

    #[getset(get = "pub")]
    parameters: DispatchParameters,

    #[getset(get = "pub")]
    payload: CommentPayload,

    #[getset(get = "pub", get_mut = "pub(crate)")]
    state: RunState,
}
