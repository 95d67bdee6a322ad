use subxt::{tx::Signer, utils::AccountId32, PolkadotConfig};

use crate::prelude::*;

/// Signs the dispatcher's extrinsics with the wallet's key pair.
#[derive(Clone, derive_more::Debug, Getters)]
#[debug("WalletSigner({})", account_id)]
pub struct WalletSigner {
    #[getset(get = "pub")]
    account_id: AccountId32,
    #[getset(get = "pub")]
    key_pair: WalletKeyPair,
}

impl Eq for WalletSigner {}
impl PartialEq for WalletSigner {
    fn eq(&self, other: &Self) -> bool {
        self.account_id == other.account_id
    }
}

impl WalletSigner {
    pub fn new(key_pair: WalletKeyPair) -> Self {
        let account_id = AccountId32(key_pair.public_bytes());
        Self {
            account_id,
            key_pair,
        }
    }

    /// SS58 rendering of the account.
    pub fn address(&self) -> Address {
        Address::from(self.account_id.to_string())
    }
}

impl Signer<PolkadotConfig> for WalletSigner {
    fn account_id(&self) -> <PolkadotConfig as subxt::Config>::AccountId {
        self.account_id.clone()
    }

    fn sign(&self, signer_payload: &[u8]) -> <PolkadotConfig as subxt::Config>::Signature {
        self.key_pair.sign(signer_payload)
    }
}
