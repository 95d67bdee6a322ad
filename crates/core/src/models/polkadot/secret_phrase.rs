/// A mnemonic seed phrase. `Debug` never prints the words, callers have to
/// [`SecretPhrase::expose`] them deliberately.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
#[debug("SecretPhrase(<{} words>)", self.word_count())]
pub struct SecretPhrase(String);

impl SecretPhrase {
    /// Collapses any run of whitespace into single spaces.
    pub fn new(words: &str) -> Self {
        Self(words.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').filter(|w| !w.is_empty()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}
