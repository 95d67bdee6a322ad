use crate::prelude::*;

/// Chain native account identifier, e.g. an SS58 string on Substrate chains.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Address(String);

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
