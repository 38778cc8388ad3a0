//! Table configuration types (Functional Core - pure data).

/// Default table name, matching the function's `DYNAMODB_TABLE`.
pub const DEFAULT_TABLE_NAME: &str = "visit-counter";

/// Attribute holding the expiry timestamp written by the function.
pub const TTL_ATTRIBUTE: &str = "expires_at";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub billing_mode: BillingMode,
    /// Attribute used for store-side expiry, if any.
    pub ttl_attribute: Option<String>,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Turns store-side expiry on `expires_at` on or off.
    pub fn with_ttl(mut self, enabled: bool) -> Self {
        self.ttl_attribute = enabled.then(|| TTL_ATTRIBUTE.to_string());
        self
    }
}

/// Returns the canonical table configuration for visit counters.
/// This is a pure function - no I/O.
pub fn visits_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "visit_date".to_string(),
            attribute_type: AttributeType::String,
        },
        sort_key: Some(KeyAttribute {
            name: "user_id".to_string(),
            attribute_type: AttributeType::String,
        }),
        billing_mode: BillingMode::PayPerRequest,
        ttl_attribute: None,
    }
}
