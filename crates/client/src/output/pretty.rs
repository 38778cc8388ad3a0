//! Pretty output formatting.

use visitcount_core::visit::{AckResponse, RecordVisitResponse};

/// Format a recorded visit for display.
pub fn format_recorded(user_id: &str, response: &RecordVisitResponse) -> String {
    let times = if response.visit_count == 1 {
        "time"
    } else {
        "times"
    };
    format!(
        "{}\n  User: {}\n  Visits today: {} {}",
        response.message, user_id, response.visit_count, times
    )
}

/// Format a pre-flight acknowledgement for display.
pub fn format_ack(endpoint: &str, ack: &AckResponse) -> String {
    format!("Pre-flight {}\n  Endpoint: {}", ack.message, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_recorded() {
        let output = format_recorded("user_abc123xyz", &RecordVisitResponse::recorded(1));
        assert_eq!(
            output,
            "Visit recorded successfully\n  User: user_abc123xyz\n  Visits today: 1 time"
        );

        let output = format_recorded("user_abc123xyz", &RecordVisitResponse::recorded(3));
        assert!(output.ends_with("3 times"));
    }

    #[test]
    fn test_format_ack() {
        assert_eq!(
            format_ack("http://localhost:3000/visits", &AckResponse::default()),
            "Pre-flight OK\n  Endpoint: http://localhost:3000/visits"
        );
    }
}
