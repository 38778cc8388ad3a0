//! JSON output formatting.

/// Format a value as compact JSON, the same shape the endpoint returns.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use visitcount_core::visit::RecordVisitResponse;

    use super::*;

    #[test]
    fn test_matches_wire_format() {
        assert_eq!(
            format_json(&RecordVisitResponse::recorded(2)),
            r#"{"message":"Visit recorded successfully","visit_count":2}"#
        );
    }
}
