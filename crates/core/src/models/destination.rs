use std::str::FromStr;

use crate::prelude::*;

/// Where the transfers of a run are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Self transfer to the dispatching wallet.
    #[default]
    OwnWallet,
    /// The chain's all-zero account.
    Null,
    Account(Address),
}

impl Destination {
    pub fn resolve<W>(&self, wallet: &W) -> Address
    where
        W: WalletHandle + ?Sized,
    {
        match self {
            Destination::OwnWallet => wallet.address(),
            Destination::Null => wallet.null_address(),
            Destination::Account(address) => address.clone(),
        }
    }
}

/// `own` and `null` select the wallet itself and the all-zero account, any
/// other value must be an SS58 account address.
impl FromStr for Destination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(Error::InvalidAddress {
                bad_value: s.to_owned(),
                underlying: "empty destination".to_owned(),
            }),
            "own" => Ok(Destination::OwnWallet),
            "null" => Ok(Destination::Null),
            address => {
                let address = Address::from(address);
                parse_account_id(&address)?;
                Ok(Destination::Account(address))
            }
        }
    }
}
