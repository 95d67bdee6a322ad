use crate::prelude::*;

/// A single transfer, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Builder)]
pub struct TransferRequest {
    #[getset(get = "pub")]
    #[builder(into)]
    destination: Address,

    #[getset(get = "pub")]
    #[builder(default)]
    amount: Amount,

    #[getset(get = "pub")]
    payload: CommentPayload,
}
