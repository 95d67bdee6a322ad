mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Polkadot/Substrate Crates
    pub use subxt::OnlineClient;
    pub use subxt::PolkadotConfig;

    // Third Party Crates
    pub use async_trait::async_trait;
    pub use bon::Builder;
    pub use derive_more::{AsRef, From};
    pub use getset::Getters;
    pub use log::{debug, error, info, warn};
    pub use serde::{Deserialize, Serialize};
    pub use url::Url;
}
