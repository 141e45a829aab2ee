//! Dashboard View Model
//!
//! Load state, row labels and appearance for the metrics dashboard.

use chrono::{NaiveTime, Timelike};
use serde_json::Number;

use crate::error::ApiError;
use crate::models::MetricsSnapshot;

/// Where the one-shot stats read stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(MetricsSnapshot),
    Failed,
}

impl LoadState {
    /// Settle the read. Errors are logged and leave no snapshot behind.
    pub fn from_result(result: Result<MetricsSnapshot, ApiError>) -> Self {
        match result {
            Ok(snapshot) => LoadState::Loaded(snapshot),
            Err(e) => {
                log::error!("[DASHBOARD] Error fetching metrics: {}", e);
                LoadState::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&MetricsSnapshot> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// One labelled line on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl MetricRow {
    fn new(label: &'static str, value: Option<String>, unit: &'static str) -> Self {
        Self {
            label,
            value: value.unwrap_or_default(),
            unit,
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}{}", self.label, self.value, self.unit)
    }
}

/// The seven snapshot rows in display order. Values are blank without a snapshot.
pub fn metric_rows(snapshot: Option<&MetricsSnapshot>) -> Vec<MetricRow> {
    vec![
        MetricRow::new("Total Today", num(snapshot, |s| &s.total_today), " ml"),
        MetricRow::new("Meals Today", num(snapshot, |s| &s.n_feeds_today), ""),
        MetricRow::new("Largest Meal", num(snapshot, |s| &s.largest_meal), " ml"),
        MetricRow::new("Last Meal Time", snapshot.map(|s| s.last_meal_time.clone()), ""),
        MetricRow::new("Pee Today", num(snapshot, |s| &s.n_pee_today), ""),
        MetricRow::new("Poo Today", num(snapshot, |s| &s.n_poo_today), ""),
        MetricRow::new("Suggested Meal", num(snapshot, |s| &s.suggested_meal), " ml"),
    ]
}

fn num(snapshot: Option<&MetricsSnapshot>, pick: impl Fn(&MetricsSnapshot) -> &Number) -> Option<String> {
    snapshot.map(|s| pick(s).to_string())
}

/// Elapsed "HH:MM" between `last_meal_time` and `now`.
///
/// A last meal later than `now` is taken to be from the previous day.
/// Returns `None` when the time doesn't parse.
pub fn time_since_last_meal(last_meal_time: &str, now: NaiveTime) -> Option<String> {
    let last = NaiveTime::parse_from_str(last_meal_time.trim(), "%H:%M").ok()?;

    const DAY_MINUTES: u32 = 24 * 60;
    let now_minutes = now.hour() * 60 + now.minute();
    let last_minutes = last.hour() * 60 + last.minute();
    let elapsed = (now_minutes + DAY_MINUTES - last_minutes) % DAY_MINUTES;

    Some(format!("{:02}:{:02}", elapsed / 60, elapsed % 60))
}

/// Dashboard color scheme, toggled by hand and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#f8f9fa",
            Theme::Dark => "#343a40",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Theme::Light => "#212529",
            Theme::Dark => "#f8f9fa",
        }
    }

    /// Inline style for the dashboard container
    pub fn container_style(self) -> String {
        format!(
            "background-color: {}; color: {}; min-height: 100vh;",
            self.background(),
            self.foreground()
        )
    }
}
