//! DynamoDB repository implementation.
//!
//! Implements [`VisitRepository`] with a single `UpdateItem` call per visit.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use visitcount_core::storage::{Result, VisitRepository};
use visitcount_core::visit::VisitKey;

use super::attributes;
use super::client::shared_client;
use super::conversions::visit_count_from_attributes;
use super::error::map_update_item_error;
use crate::config::Config;
use crate::error::ConfigError;

/// DynamoDB-based visit counter storage.
#[derive(Debug, Clone)]
pub struct DynamoDbVisitRepository {
    client: Client,
    table_name: String,
    ttl_days: Option<u32>,
}

impl DynamoDbVisitRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            ttl_days: None,
        }
    }

    /// Stamps new counters with an `expires_at` attribute `ttl_days` after
    /// the visit day. `None` keeps counters forever.
    pub fn with_ttl_days(mut self, ttl_days: Option<u32>) -> Self {
        self.ttl_days = ttl_days;
        self
    }

    /// Creates a repository on the process-wide client.
    ///
    /// Fails when `DYNAMODB_TABLE` is not configured.
    pub async fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let table_name = config.require_table_name()?;
        let client = shared_client(config).await.clone();

        Ok(Self::new(client, table_name).with_ttl_days(config.visit_ttl_days))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl VisitRepository for DynamoDbVisitRepository {
    async fn increment_visit(&self, key: &VisitKey) -> Result<u64> {
        let update = attributes::increment_update(key.visit_date, self.ttl_days);

        let request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(attributes::key_item(key)))
            .update_expression(update.expression)
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::UpdatedNew);

        let output = request.send().await.map_err(map_update_item_error)?;

        visit_count_from_attributes(output.attributes())
    }
}
