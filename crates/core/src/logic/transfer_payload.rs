use std::str::FromStr;

use subxt::{dynamic::Value, tx::DynamicPayload, utils::AccountId32};

use crate::prelude::*;

pub(crate) fn parse_account_id(address: &Address) -> Result<AccountId32> {
    AccountId32::from_str(address.as_str()).map_err(|e| Error::InvalidAddress {
        bad_value: address.to_string(),
        underlying: e.to_debug_string(),
    })
}

fn transfer_call(request: &TransferRequest) -> Result<Value> {
    let destination = parse_account_id(request.destination())?;
    Ok(subxt::dynamic::tx(
        "Balances",
        "transfer_keep_alive",
        vec![
            Value::unnamed_variant("Id", [Value::from_bytes(destination.0)]),
            Value::u128(request.amount().base_units()),
        ],
    )
    .into_value())
}

fn remark_call(payload: &CommentPayload) -> Value {
    subxt::dynamic::tx(
        "System",
        "remark_with_event",
        vec![Value::from_bytes(payload.as_bytes())],
    )
    .into_value()
}

/// Every request becomes a transfer followed by a remark carrying its
/// comment; the whole batch is one atomic `Utility.batch_all` extrinsic.
pub fn batch_payload(batch: &Batch) -> Result<DynamicPayload> {
    let calls = batch
        .iter()
        .map(|request| Ok([transfer_call(request)?, remark_call(request.payload())]))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    Ok(subxt::dynamic::tx(
        "Utility",
        "batch_all",
        vec![Value::unnamed_composite(calls)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_to(destination: &str, count: usize) -> Batch {
        let request = TransferRequest::builder()
            .destination(destination)
            .payload(CommentPayload::new("mint"))
            .build();
        Batch::repeated(request, count, DEFAULT_BATCH_CAP).unwrap()
    }

    #[test]
    fn batch_all_carries_transfer_and_remark_per_request() {
        let null = AccountId32([0u8; 32]).to_string();
        let payload = batch_payload(&batch_to(&null, 3)).unwrap();
        assert_eq!(payload.pallet_name(), "Utility");
        assert_eq!(payload.call_name(), "batch_all");
    }

    #[test]
    fn invalid_destination_is_rejected() {
        assert!(matches!(
            batch_payload(&batch_to("not-an-ss58-address", 1)),
            Err(Error::InvalidAddress { .. })
        ));
    }
}
