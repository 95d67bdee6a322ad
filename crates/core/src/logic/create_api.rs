use std::sync::Arc;

use crate::prelude::*;

use jsonrpsee_client_transport::ws::WsTransportClientBuilder;
use jsonrpsee_core::client::Client;
use subxt::backend::legacy::LegacyBackend;
use tokio::time::Duration;

/// Connects to the node at `node_url`. Any failure here is fatal for a run,
/// there is no reconnect.
pub async fn create_api(node_url: Url) -> Result<Api> {
    info!("Connecting to {node_url}");
    let (node_sender, node_receiver) = WsTransportClientBuilder::default()
        .build(node_url.clone())
        .await
        .map_err(|e| BootstrapError::CreateApiFailure {
            underlying: e.to_debug_string(),
        })?;

    let client = Client::builder()
        .request_timeout(Duration::from_secs(3600))
        .max_buffer_capacity_per_subscription(4096 * 1024)
        .build_with_tokio(node_sender, node_receiver);

    let backend = LegacyBackend::builder().build(client);
    let api = Api::from_backend(Arc::new(backend)).await.map_err(|e| {
        BootstrapError::CreateApiFailure {
            underlying: e.to_debug_string(),
        }
    })?;

    debug!("Connected to {node_url}");
    Ok(api)
}
