use sp_core::{ed25519, sr25519, Pair};

use crate::prelude::*;

/// A wallet signer together with the phrase it was derived from.
#[derive(Debug, Clone, Getters)]
pub struct DerivedWallet {
    #[getset(get = "pub")]
    signer: WalletSigner,

    #[getset(get = "pub")]
    phrase: SecretPhrase,

    /// `true` if the phrase was freshly generated rather than supplied.
    #[getset(get = "pub")]
    generated: bool,
}

/// Derives the wallet from `phrase`, or generates a new 12 word phrase when
/// `phrase` is absent or blank.
pub fn derive_wallet(phrase: Option<&str>, scheme: WalletScheme) -> Result<DerivedWallet> {
    let phrase = phrase.map(SecretPhrase::new).filter(|p| !p.is_blank());
    let (key_pair, phrase, generated) = match scheme {
        WalletScheme::Sr25519 => {
            let (pair, phrase, generated) = derive_key_pair::<sr25519::Pair>(phrase)?;
            (WalletKeyPair::Sr25519(pair), phrase, generated)
        }
        WalletScheme::Ed25519 => {
            let (pair, phrase, generated) = derive_key_pair::<ed25519::Pair>(phrase)?;
            (WalletKeyPair::Ed25519(pair), phrase, generated)
        }
    };
    let signer = WalletSigner::new(key_pair);
    debug!("Derived {scheme} wallet {}", signer.address());
    Ok(DerivedWallet {
        signer,
        phrase,
        generated,
    })
}

fn derive_key_pair<T>(phrase: Option<SecretPhrase>) -> Result<(T, SecretPhrase, bool)>
where
    T: Pair,
{
    match phrase {
        Some(phrase) => {
            let (pair, _seed) = T::from_phrase(phrase.expose(), None).map_err(|e| {
                Error::WalletDerivation {
                    underlying: e.to_debug_string(),
                }
            })?;
            Ok((pair, phrase, false))
        }
        None => {
            let (pair, words, _seed) = T::generate_with_phrase(None);
            Ok((pair, SecretPhrase::new(&words), true))
        }
    }
}
