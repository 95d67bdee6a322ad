use crate::prelude::*;

/// Reads the balance of `address` at the latest chain tip and fails with
/// [`Error::InsufficientFunds`] below `required`.
///
/// The read is a snapshot: nothing stops concurrent units from spending the
/// same funds between this check and their submission.
pub async fn check_funding<L>(
    ledger: &L,
    address: &Address,
    required: Amount,
    denomination: &Denomination,
) -> Result<Amount>
where
    L: LedgerClient + ?Sized,
{
    let tip = ledger.chain_tip().await?;
    let balance = ledger.balance(address, &tip).await?;
    if balance < required {
        return Err(Error::InsufficientFunds {
            balance: denomination.format(balance),
            required: denomination.format(required),
        });
    }
    debug!(
        "Balance {} at block #{} covers the minimum of {}",
        denomination.format(balance),
        tip.number(),
        denomination.format(required)
    );
    Ok(balance)
}
