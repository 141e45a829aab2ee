//! UI Components
//!
//! Leptos components for the two views and their pieces.

mod entry_form;
mod loading_indicator;
mod metrics_dashboard;
mod nav_bar;
mod theme_switch;

pub use entry_form::EntryForm;
pub use loading_indicator::LoadingIndicator;
pub use metrics_dashboard::MetricsDashboard;
pub use nav_bar::NavBar;
pub use theme_switch::ThemeSwitch;
