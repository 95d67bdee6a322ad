use sp_core::{ed25519, sr25519, Pair};
use subxt::utils::MultiSignature;

/// Key scheme the wallet is derived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum WalletScheme {
    #[default]
    #[display("sr25519")]
    Sr25519,

    #[display("ed25519")]
    Ed25519,
}

#[derive(Clone)]
pub enum WalletKeyPair {
    Sr25519(sr25519::Pair),
    Ed25519(ed25519::Pair),
}

impl WalletKeyPair {
    pub fn scheme(&self) -> WalletScheme {
        match self {
            WalletKeyPair::Sr25519(_) => WalletScheme::Sr25519,
            WalletKeyPair::Ed25519(_) => WalletScheme::Ed25519,
        }
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        match self {
            WalletKeyPair::Sr25519(p) => p.public().0,
            WalletKeyPair::Ed25519(p) => p.public().0,
        }
    }

    pub fn sign(&self, payload: &[u8]) -> MultiSignature {
        match self {
            WalletKeyPair::Sr25519(p) => MultiSignature::Sr25519(p.sign(payload).0),
            WalletKeyPair::Ed25519(p) => MultiSignature::Ed25519(p.sign(payload).0),
        }
    }
}

impl std::fmt::Debug for WalletKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WalletKeyPair({}, {:?})", self.scheme(), self.public_bytes())
    }
}

impl Eq for WalletKeyPair {}
impl PartialEq for WalletKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.scheme() == other.scheme() && self.public_bytes() == other.public_bytes()
    }
}
