//! Stats Command
//!
//! Reads the day's metrics snapshot from the stats source.

use gloo_net::http::Request;

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::models::MetricsSnapshot;

/// Fetch the current snapshot from `{api_base}/fetch_stats`
pub async fn fetch_stats() -> ApiResult<MetricsSnapshot> {
    fetch_stats_from(&config::stats_url(&config::get_api_base())).await
}

pub async fn fetch_stats_from(url: &str) -> ApiResult<MetricsSnapshot> {
    log::debug!("[STATS] GET {}", url);

    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body = response.text().await?;
    decode_snapshot(&body)
}

/// Decode a response body, rejecting anything that isn't the snapshot shape
pub fn decode_snapshot(body: &str) -> ApiResult<MetricsSnapshot> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "total_today": 120,
        "n_feeds_today": 3,
        "largest_meal": 60,
        "last_meal_time": "14:30",
        "n_pee_today": 4,
        "n_poo_today": 1,
        "suggested_meal": 80
    }"#;

    #[test]
    fn test_decode_valid_snapshot() {
        let snapshot = decode_snapshot(VALID).expect("valid body should decode");
        assert_eq!(snapshot.total_today.as_i64(), Some(120));
        assert_eq!(snapshot.n_feeds_today.as_i64(), Some(3));
        assert_eq!(snapshot.largest_meal.as_i64(), Some(60));
        assert_eq!(snapshot.last_meal_time, "14:30");
        assert_eq!(snapshot.n_pee_today.as_i64(), Some(4));
        assert_eq!(snapshot.n_poo_today.as_i64(), Some(1));
        assert_eq!(snapshot.suggested_meal.as_i64(), Some(80));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let body = VALID.replacen('{', r#"{"server_version": "0.3","#, 1);
        assert!(decode_snapshot(&body).is_ok());
    }

    #[test]
    fn test_decode_missing_field_fails() {
        // Early backend builds only sent the three bottle totals
        let body = r#"{"total_today": 120, "n_feeds_today": 3, "largest_meal": 60}"#;
        assert!(matches!(decode_snapshot(body), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_wrong_type_fails() {
        let body = VALID.replace("\"total_today\": 120", "\"total_today\": \"120\"");
        assert!(matches!(decode_snapshot(&body), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(decode_snapshot("<html>502</html>"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_snapshot(""), Err(ApiError::Decode(_))));
    }
}
