use std::sync::Arc;

use crate::prelude::*;

pub const DATA_URI_JSON_PREFIX: &str = "data:application/json,";

pub const DEFAULT_PROTOCOL: &str = "ton-20";
pub const DEFAULT_TICK: &str = "nano";
pub const DEFAULT_MINT_AMOUNT: &str = "100000000000";

/// Opaque comment bytes attached to every transfer of a run.
///
/// Cloning is cheap, a run shares one payload across all of its requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentPayload(Arc<[u8]>);

impl CommentPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for CommentPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// The inscription operation carried in the comment, serialised as
/// `{"p":..,"op":..,"tick":..,"amt":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
pub struct MintInscription {
    #[serde(rename = "p")]
    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_PROTOCOL.to_owned())]
    protocol: String,

    #[getset(get = "pub")]
    #[builder(into, default = "mint".to_owned())]
    op: String,

    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_TICK.to_owned())]
    tick: String,

    #[serde(rename = "amt")]
    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_MINT_AMOUNT.to_owned())]
    amount: String,
}

impl Default for MintInscription {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MintInscription {
    pub fn to_comment_payload(&self) -> Result<CommentPayload> {
        let json = serde_json::to_string(self).map_err(|e| Error::PayloadEncoding {
            underlying: e.to_string(),
        })?;
        Ok(CommentPayload::new(format!("{DATA_URI_JSON_PREFIX}{json}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mint_payload() {
        let payload = MintInscription::default().to_comment_payload().unwrap();
        assert_eq!(
            payload.to_string(),
            r#"data:application/json,{"p":"ton-20","op":"mint","tick":"nano","amt":"100000000000"}"#
        );
    }

    #[test]
    fn custom_tick_is_escaped() {
        let payload = MintInscription::builder()
            .tick("gr\"am")
            .amount("1")
            .build()
            .to_comment_payload()
            .unwrap();
        assert_eq!(
            payload.to_string(),
            r#"data:application/json,{"p":"ton-20","op":"mint","tick":"gr\"am","amt":"1"}"#
        );
    }

    #[test]
    fn clones_share_bytes() {
        let payload = CommentPayload::new("hello");
        let clone = payload.clone();
        assert_eq!(clone.as_bytes().as_ptr(), payload.as_bytes().as_ptr());
        assert_eq!(clone.len(), 5);
    }
}
