use parity_scale_codec::Decode;
use subxt::utils::{AccountId32, H256};

use crate::prelude::*;

// Assumes the target chain uses the stock `frame_system`/`pallet_balances`
// account layout.
type AccountInfo = frame_system::AccountInfo<u32, pallet_balances::AccountData<u128>>;

pub async fn get_encoded_account_state(
    api: &Api,
    account_id: &AccountId32,
    at: H256,
) -> Result<Option<Vec<u8>>, LedgerError> {
    let account_state_storage_addr = subxt::dynamic::storage(
        "System",
        "Account",
        vec![subxt::dynamic::Value::from_bytes(account_id.0)],
    );
    let account_state_encoded = api
        .storage()
        .at(at)
        .fetch(&account_state_storage_addr)
        .await
        .map_err(|e| LedgerError::AccountStorageFetchFailed {
            underlying: e.to_debug_string(),
        })?
        .map(|v| v.into_encoded());
    Ok(account_state_encoded)
}

/// Free balance of `account_id` at block `at`; accounts without state hold nothing.
pub async fn get_free_balance(
    api: &Api,
    account_id: &AccountId32,
    at: H256,
) -> Result<Amount, LedgerError> {
    let Some(encoded_account_state) = get_encoded_account_state(api, account_id, at).await? else {
        debug!("Account {account_id} has no state at {at:?}");
        return Ok(Amount::ZERO);
    };
    let account_state = decode_account_state(&encoded_account_state)?;
    Ok(Amount::from_base_units(account_state.data.free))
}

fn decode_account_state(encoded: &[u8]) -> Result<AccountInfo, LedgerError> {
    AccountInfo::decode(&mut &encoded[..]).map_err(|e| {
        LedgerError::EncodedAccountStateDecodeFailed {
            underlying: e.to_debug_string(),
        }
    })
}
