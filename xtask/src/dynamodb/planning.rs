//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    pub ttl: TtlState,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Time-to-live state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtlState {
    Disabled,
    /// Enabled or being enabled on the given attribute.
    Enabled { attribute: String },
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists, expiry needs to be switched on.
    EnableTtl {
        table_name: String,
        attribute: String,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
///
/// Expiry is only ever switched on. A table that already expires items is
/// left alone even when `desired` does not ask for it.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    match (&desired.ttl_attribute, &state.ttl) {
        (Some(wanted), TtlState::Enabled { attribute }) if wanted == attribute => {
            DeployPlan::NoChanges {
                table_name: desired.table_name.clone(),
            }
        }
        (Some(wanted), _) => DeployPlan::EnableTtl {
            table_name: desired.table_name.clone(),
            attribute: wanted.clone(),
        },
        (None, _) => DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!("  Partition key: {} (S)", config.partition_key.name),
            ];
            if let Some(sk) = &config.sort_key {
                lines.push(format!("  Sort key: {} (S)", sk.name));
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
            if let Some(attribute) = &config.ttl_attribute {
                lines.push(format!("  + TTL: {}", attribute));
            }
            lines
        }
        DeployPlan::EnableTtl {
            table_name,
            attribute,
        } => vec![
            format!("~ Update table: {}", table_name),
            format!("  + Enable TTL: {}", attribute),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::visits_table_config;

    fn active(ttl: TtlState) -> TableState {
        TableState {
            status: TableStatus::Active,
            ttl,
        }
    }

    fn expires_at() -> TtlState {
        TtlState::Enabled {
            attribute: "expires_at".to_string(),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = visits_table_config().with_ttl(true);

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(
            plan,
            DeployPlan::CreateTable {
                config: desired.clone()
            }
        );
        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: visit-counter",
                "  Partition key: visit_date (S)",
                "  Sort key: user_id (S)",
                "  Billing: PAY_PER_REQUEST",
                "  + TTL: expires_at",
            ]
        );
    }

    #[test]
    fn test_existing_table_without_ttl_request_is_unchanged() {
        let plan = calculate_deploy_plan(Some(&active(TtlState::Disabled)), &visits_table_config());

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "visit-counter".to_string()
            }
        );
    }

    #[test]
    fn test_ttl_is_enabled_when_requested() {
        let desired = visits_table_config().with_ttl(true);

        let plan = calculate_deploy_plan(Some(&active(TtlState::Disabled)), &desired);

        assert_eq!(
            plan,
            DeployPlan::EnableTtl {
                table_name: "visit-counter".to_string(),
                attribute: "expires_at".to_string(),
            }
        );
        assert_eq!(
            format_deploy_plan(&plan),
            vec!["~ Update table: visit-counter", "  + Enable TTL: expires_at"]
        );
    }

    #[test]
    fn test_ttl_on_another_attribute_is_replaced() {
        let desired = visits_table_config().with_ttl(true);
        let state = active(TtlState::Enabled {
            attribute: "ttl".to_string(),
        });

        assert!(matches!(
            calculate_deploy_plan(Some(&state), &desired),
            DeployPlan::EnableTtl { .. }
        ));
    }

    #[test]
    fn test_ttl_already_enabled_is_unchanged() {
        let desired = visits_table_config().with_ttl(true);

        assert!(matches!(
            calculate_deploy_plan(Some(&active(expires_at())), &desired),
            DeployPlan::NoChanges { .. }
        ));
        assert!(matches!(
            calculate_deploy_plan(Some(&active(expires_at())), &visits_table_config()),
            DeployPlan::NoChanges { .. }
        ));
    }

    #[test]
    fn test_destroy_plan() {
        let state = active(TtlState::Disabled);

        assert_eq!(
            calculate_destroy_plan(Some(&state), "visit-counter"),
            DestroyPlan::DeleteTable {
                table_name: "visit-counter".to_string()
            }
        );
        let gone = calculate_destroy_plan(None, "visit-counter");
        assert_eq!(
            format_destroy_plan(&gone),
            vec!["= Table 'visit-counter' does not exist"]
        );
    }
}
