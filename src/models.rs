//! Frontend Models
//!
//! Data structures for the metrics snapshot and the draft feeding entry.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Aggregate feeding/diaper statistics for the current day (matches `/fetch_stats`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_today: Number,
    pub n_feeds_today: Number,
    pub largest_meal: Number,
    pub last_meal_time: String,
    pub n_pee_today: Number,
    pub n_poo_today: Number,
    pub suggested_meal: Number,
}

/// Bottle amount in ml, or nothing entered yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Amount {
    #[default]
    Empty,
    Ml(i64),
}

impl Amount {
    /// Coerce raw input text the way `parseInt(text, 10)` reads it:
    /// leading whitespace, optional sign, then as many digits as are present.
    /// Empty text, or text with no leading digits, stays `Empty`.
    /// Digit runs too long for an `i64` saturate.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return Amount::Empty;
        }

        match digits.parse::<i64>() {
            Ok(value) if negative => Amount::Ml(-value),
            Ok(value) => Amount::Ml(value),
            Err(_) if negative => Amount::Ml(i64::MIN),
            Err(_) => Amount::Ml(i64::MAX),
        }
    }

    /// Text shown back in the number input
    pub fn as_input_value(&self) -> String {
        match self {
            Amount::Empty => String::new(),
            Amount::Ml(value) => value.to_string(),
        }
    }
}

// Serialized as the integer or "" so a logged draft reads like the form it came from
impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Empty => serializer.serialize_str(""),
            Amount::Ml(value) => serializer.serialize_i64(*value),
        }
    }
}

/// Draft feeding entry field names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Time,
    Amount,
    Note,
}

/// User-edited, not-yet-submitted feeding event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Store)]
pub struct FeedingDraft {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM on a half-hour boundary, or empty when nothing is selected
    pub time: String,
    pub amount: Amount,
    pub note: String,
}

impl FeedingDraft {
    /// Fresh draft dated `today`, all other fields empty
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            date: today.into(),
            ..Default::default()
        }
    }

    /// Fresh draft dated with the current UTC day
    pub fn for_today() -> Self {
        Self::new(chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> FeedingDraft {
        FeedingDraft {
            date: "2024-03-01".to_string(),
            time: "07:30".to_string(),
            amount: Amount::Ml(90),
            note: "spat up a little".to_string(),
        }
    }

    #[test]
    fn test_amount_parse() {
        assert_eq!(Amount::parse("250"), Amount::Ml(250));
        assert_eq!(Amount::parse(""), Amount::Empty);
        assert_eq!(Amount::parse("  42"), Amount::Ml(42));
        assert_eq!(Amount::parse("-5"), Amount::Ml(-5));
        assert_eq!(Amount::parse("+7"), Amount::Ml(7));
        assert_eq!(Amount::parse("120.5"), Amount::Ml(120));
        assert_eq!(Amount::parse("80ml"), Amount::Ml(80));
        assert_eq!(Amount::parse("abc"), Amount::Empty);
        assert_eq!(Amount::parse("-"), Amount::Empty);
    }

    #[test]
    fn test_amount_parse_overflow_saturates() {
        assert_eq!(Amount::parse("99999999999999999999"), Amount::Ml(i64::MAX));
        assert_eq!(Amount::parse("-99999999999999999999"), Amount::Ml(i64::MIN));
        assert_eq!(Amount::parse("9223372036854775807"), Amount::Ml(i64::MAX));
        assert_ne!(Amount::parse("123456789012345678901234ml"), Amount::Empty);
    }

    #[test]
    fn test_new_draft_is_seeded_with_date_only() {
        let draft = FeedingDraft::new("2024-03-01");
        assert_eq!(draft.date, "2024-03-01");
        assert!(draft.time.is_empty());
        assert_eq!(draft.amount, Amount::Empty);
        assert!(draft.note.is_empty());
    }

    #[test]
    fn test_for_today_uses_iso_date() {
        let draft = FeedingDraft::for_today();
        assert!(chrono::NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_draft_serializes_like_the_form() {
        let json = serde_json::to_value(FeedingDraft::new("2024-03-01")).unwrap();
        assert_eq!(json["amount"], "");

        let json = serde_json::to_value(sample_draft()).unwrap();
        assert_eq!(json["amount"], 90);
        assert_eq!(json["time"], "07:30");
    }

    #[test]
    fn test_snapshot_deserialize() {
        let snapshot: MetricsSnapshot = serde_json::from_str(
            r#"{"total_today":120,"n_feeds_today":3,"largest_meal":60,"last_meal_time":"14:30",
                "n_pee_today":4,"n_poo_today":1,"suggested_meal":75.5}"#,
        )
        .unwrap();
        assert_eq!(snapshot.total_today.to_string(), "120");
        assert_eq!(snapshot.suggested_meal.to_string(), "75.5");
        assert_eq!(snapshot.last_meal_time, "14:30");
    }
}
