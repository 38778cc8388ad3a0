use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Format used for the `visit_date` partition key (ISO 8601 calendar date).
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies a single daily counter: one per user per UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitKey {
    pub visit_date: NaiveDate,
    pub user_id: String,
}

impl VisitKey {
    /// Creates a key for the given date and user.
    pub fn new(visit_date: NaiveDate, user_id: impl Into<String>) -> Self {
        Self {
            visit_date,
            user_id: user_id.into(),
        }
    }

    /// The `visit_date` rendered as `YYYY-MM-DD`.
    pub fn visit_date_string(&self) -> String {
        format_visit_date(self.visit_date)
    }
}

/// A daily counter as seen right after an increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub visit_date: NaiveDate,
    pub user_id: String,
    pub visit_count: u64,
}

impl VisitRecord {
    /// Builds the record for a key and the post-increment count.
    pub fn new(key: VisitKey, visit_count: u64) -> Self {
        Self {
            visit_date: key.visit_date,
            user_id: key.user_id,
            visit_count,
        }
    }
}

/// The UTC calendar date a visit at `now` is counted under.
pub fn visit_date_for(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_visit_date(date: NaiveDate) -> String {
    date.format(VISIT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_visit_date_is_utc_calendar_day() {
        let late_evening = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let just_after_midnight = Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 1).unwrap();

        assert_eq!(
            visit_date_for(late_evening),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(
            visit_date_for(just_after_midnight),
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
        );
    }

    #[test]
    fn test_format_visit_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_visit_date(date), "2024-01-05");
    }

    #[test]
    fn test_visit_key_date_string() {
        let key = VisitKey::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), "alice");
        assert_eq!(key.visit_date_string(), "2023-12-31");
        assert_eq!(key.user_id, "alice");
    }

    #[test]
    fn test_visit_record_from_key() {
        let key = VisitKey::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), "bob");
        let record = VisitRecord::new(key, 3);

        assert_eq!(record.user_id, "bob");
        assert_eq!(record.visit_count, 3);
        assert_eq!(format_visit_date(record.visit_date), "2024-06-15");
    }
}
