use crate::prelude::*;

/// The wallet transfers are sent from.
pub trait WalletHandle: Send + Sync {
    fn address(&self) -> Address;

    /// The chain's all-zero account.
    fn null_address(&self) -> Address;

    fn build_transfer(
        &self,
        destination: Address,
        amount: Amount,
        payload: CommentPayload,
    ) -> TransferRequest {
        TransferRequest::builder()
            .destination(destination)
            .amount(amount)
            .payload(payload)
            .build()
    }
}
