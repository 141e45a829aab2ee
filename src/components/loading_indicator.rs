//! Loading Indicator Component
//!
//! Spinner shown while a read is outstanding.

use leptos::prelude::*;

/// Full-page progress spinner
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="progressbar" aria-busy="true">
            <div class="loading-spinner"></div>
        </div>
    }
}
