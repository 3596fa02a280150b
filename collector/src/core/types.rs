//! Record types persisted by the collector.
//!
//! Field names and date formats are part of the on-disk contract for
//! `customers.json` and `reviews.json`; changing them breaks existing data.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type CustomerId = u64;
pub type ReviewId = u64;

/// Format used for review timestamps in stores and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A customer who bought a product. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// 1-based, assigned as `count + 1`.
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub product: String,
    /// Serialized as `YYYY-MM-DD`.
    pub join_date: NaiveDate,
}

/// A rating left by a customer.
///
/// `customer_name` and `product` are copied from the customer when the review
/// is created and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub product: String,
    /// Expected in `1..=5`; callers validate before insertion.
    pub rating: u8,
    pub comment: String,
    #[serde(rename = "date", with = "minute_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Review {
    /// Timestamp rendered as `YYYY-MM-DD HH:MM`.
    pub fn date_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Result of `Repository::add_review`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddReviewOutcome {
    /// Review stored under the given id.
    Added(ReviewId),
    /// No customer with the requested id; nothing was stored.
    CustomerNotFound,
}

mod minute_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{customer, review};

    #[test]
    fn customer_serializes_join_date_as_plain_date() {
        let json = serde_json::to_value(customer(1, "Ada", "Watch")).expect("json");
        assert_eq!(json["join_date"], "2024-03-01");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn review_serializes_timestamp_under_date_key() {
        let json = serde_json::to_value(review(1, 1, "Watch", 5, "great")).expect("json");
        assert_eq!(json["date"], "2024-03-01 09:30");
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn review_rejects_timestamp_in_wrong_format() {
        let raw = r#"{"id":1,"customer_id":1,"customer_name":"Ada","product":"Watch","rating":5,"comment":"x","date":"01/03/2024"}"#;
        assert!(serde_json::from_str::<Review>(raw).is_err());
    }

    #[test]
    fn date_label_uses_minute_precision() {
        assert_eq!(review(1, 1, "Watch", 4, "ok").date_label(), "2024-03-01 09:30");
    }
}
