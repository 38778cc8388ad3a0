use std::env;

use crate::error::ConfigError;

pub const DYNAMODB_TABLE_VAR: &str = "DYNAMODB_TABLE";
pub const VISIT_TTL_DAYS_VAR: &str = "VISIT_TTL_DAYS";
pub const AWS_ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";
pub const AWS_REGION_VAR: &str = "AWS_REGION";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the visit counters.
    pub table_name: Option<String>,
    /// Days a counter is kept before store-side expiry (default: never expires).
    pub visit_ttl_days: Option<u32>,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// AWS region override.
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE` - Table name (required by the DynamoDB backend)
    /// - `VISIT_TTL_DAYS` - Positive number of days before a counter expires
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override
    /// - `AWS_REGION` - AWS region override
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let visit_ttl_days = match non_empty(VISIT_TTL_DAYS_VAR) {
            None => None,
            Some(raw) => Some(parse_ttl_days(&raw)?),
        };

        Ok(Self {
            table_name: non_empty(DYNAMODB_TABLE_VAR),
            visit_ttl_days,
            endpoint_url: non_empty(AWS_ENDPOINT_URL_VAR),
            region: non_empty(AWS_REGION_VAR),
        })
    }

    /// The table name, or an error naming the missing variable.
    pub fn require_table_name(&self) -> Result<&str, ConfigError> {
        self.table_name
            .as_deref()
            .ok_or(ConfigError::Missing(DYNAMODB_TABLE_VAR))
    }
}

fn parse_ttl_days(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        name: VISIT_TTL_DAYS_VAR,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(days) => Ok(days),
        Err(err) => Err(invalid(&err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(
            config.require_table_name(),
            Err(ConfigError::Missing("DYNAMODB_TABLE"))
        );
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("DYNAMODB_TABLE", "visits"),
            ("VISIT_TTL_DAYS", "30"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]))
        .unwrap();

        assert_eq!(config.require_table_name(), Ok("visits"));
        assert_eq!(config.visit_ttl_days, Some(30));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_blank_table_name_is_missing() {
        let config = Config::from_lookup(lookup(&[("DYNAMODB_TABLE", "  ")])).unwrap();
        assert!(config.require_table_name().is_err());
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let result = Config::from_lookup(lookup(&[("VISIT_TTL_DAYS", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "VISIT_TTL_DAYS",
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_ttl_is_rejected() {
        let result = Config::from_lookup(lookup(&[("VISIT_TTL_DAYS", "a week")]));
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for VISIT_TTL_DAYS"));
    }
}
