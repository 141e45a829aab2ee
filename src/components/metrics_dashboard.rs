//! Metrics Dashboard Component
//!
//! Fetches today's feeding/diaper snapshot once on mount and renders it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{LoadingIndicator, ThemeSwitch};
use crate::lifecycle::cancel_on_cleanup;
use crate::metrics::{metric_rows, time_since_last_meal, LoadState, Theme};

#[component]
pub fn MetricsDashboard() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (theme, set_theme) = signal(Theme::default());

    // Responses arriving after unmount must not touch disposed signals
    let token = cancel_on_cleanup();

    // Load stats once on mount
    Effect::new(move |_| {
        let token = token.clone();
        spawn_local(async move {
            let result = commands::fetch_stats().await;
            let applied = token.apply_if_live(result, |result| {
                set_load_state.set(LoadState::from_result(result));
            });
            if !applied {
                log::debug!("[DASHBOARD] Unmounted before stats arrived, dropping response");
            }
        });
    });

    view! {
        <Show
            when=move || !load_state.with(LoadState::is_loading)
            fallback=|| view! { <LoadingIndicator /> }
        >
            <div class="dashboard" style=move || theme.get().container_style()>
                <div class="dashboard-header">
                    <h2>"👩‍🍼 Aron tracker"</h2>
                    <ThemeSwitch theme=theme set_theme=set_theme />
                </div>

                {move || load_state.with(|state| metric_rows(state.snapshot()))
                    .into_iter()
                    .map(|row| view! { <h6 class="metric-row">{row.text()}</h6> })
                    .collect_view()}

                {move || load_state.with(|state| {
                    state.snapshot().and_then(|snapshot| {
                        time_since_last_meal(&snapshot.last_meal_time, chrono::Local::now().time())
                    })
                }).map(|elapsed| view! {
                    <h6 class="metric-row">"Time Since Last Meal: " {elapsed}</h6>
                })}
            </div>
        </Show>
    }
}
