//! Feed Tracker App
//!
//! Root component: routes to the dashboard and the entry form.
//! The two views share no state.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{EntryForm, MetricsDashboard, NavBar};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=MetricsDashboard />
                    <Route path=path!("/entry") view=EntryForm />
                </Routes>
            </main>
        </Router>
    }
}
