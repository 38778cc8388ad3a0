//! Process-wide DynamoDB client.
//!
//! Building a client resolves credentials and region, so it happens once per
//! execution environment and the result is shared by every invocation.

use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

use crate::config::Config;

static SHARED_CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Returns the shared client, building it from `config` on first use.
///
/// Later calls ignore `config` and return the client built the first time.
pub async fn shared_client(config: &Config) -> &'static Client {
    SHARED_CLIENT.get_or_init(|| create_client(config)).await
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        tracing::debug!(%endpoint, "Using custom DynamoDB endpoint");
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
