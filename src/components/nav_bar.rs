//! Navigation Bar Component
//!
//! Links between the dashboard and the entry form.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-link">
                <A href="/">"Dashboard"</A>
            </span>
            <span class="nav-link">
                <A href="/entry">"New Entry"</A>
            </span>
        </nav>
    }
}
