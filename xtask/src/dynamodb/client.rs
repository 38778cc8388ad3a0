//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::types::{TableStatus as SdkTableStatus, TimeToLiveStatus};
use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus, TtlState};

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let Some(status) = get_table_status(client, table_name).await? else {
        return Ok(None);
    };

    let ttl = get_ttl_state(client, table_name).await?;

    Ok(Some(TableState { status, ttl }))
}

/// Fetches the table status alone, returns None if table doesn't exist.
pub async fn get_table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err)
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception()) =>
        {
            return Ok(None);
        }
        Err(err) => return Err(DynamodbError::sdk(err)),
    };

    let table = response.table().ok_or_else(|| DynamodbError::TableNotFound {
        table_name: table_name.to_string(),
    })?;

    let status = match table.table_status() {
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    Ok(Some(status))
}

async fn get_ttl_state(client: &Client, table_name: &str) -> Result<TtlState> {
    let response = client
        .describe_time_to_live()
        .table_name(table_name)
        .send()
        .await
        .map_err(DynamodbError::sdk)?;

    let Some(description) = response.time_to_live_description() else {
        return Ok(TtlState::Disabled);
    };

    match (description.time_to_live_status(), description.attribute_name()) {
        (
            Some(TimeToLiveStatus::Enabled | TimeToLiveStatus::Enabling),
            Some(attribute),
        ) => Ok(TtlState::Enabled {
            attribute: attribute.to_string(),
        }),
        _ => Ok(TtlState::Disabled),
    }
}
