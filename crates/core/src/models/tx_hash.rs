use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine as _,
};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, From, AsRef, derive_more::Display)]
#[display("{}", self.to_base64())]
pub struct TxHash(Vec<u8>);

impl From<[u8; 32]> for TxHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}

impl TxHash {
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn to_base64_url(&self) -> String {
        URL_SAFE.encode(&self.0)
    }

    /// `explorer_url` is used as a prefix, e.g. `https://explorer.example/tx/`.
    pub fn explorer_link(&self, explorer_url: &str) -> String {
        format!("{explorer_url}{}", self.to_base64_url())
    }
}
