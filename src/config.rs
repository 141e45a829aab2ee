//! API Configuration
//!
//! Location of the stats source. Overridable from local storage.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Local storage key holding an API base override
pub const API_BASE_STORAGE_KEY: &str = "feed_tracker_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    normalize_api_base(stored.as_deref())
}

/// Trim trailing slashes, falling back to the default for missing or blank values
pub fn normalize_api_base(stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Stats endpoint under the given base
pub fn stats_url(api_base: &str) -> String {
    format!("{}/fetch_stats", api_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(normalize_api_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_api_base(Some("")), DEFAULT_API_BASE);
        assert_eq!(normalize_api_base(Some("   ")), DEFAULT_API_BASE);
    }

    #[test]
    fn test_normalize_trims_trailing_slash() {
        assert_eq!(normalize_api_base(Some("http://192.168.1.20:8080/")), "http://192.168.1.20:8080");
        assert_eq!(normalize_api_base(Some("https://stats.example//")), "https://stats.example");
    }

    #[test]
    fn test_stats_url() {
        assert_eq!(stats_url(DEFAULT_API_BASE), "http://localhost:8080/fetch_stats");
        assert_eq!(stats_url(&normalize_api_base(Some("http://host:9000/"))), "http://host:9000/fetch_stats");
    }
}
