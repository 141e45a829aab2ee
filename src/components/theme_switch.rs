//! Theme Switch Component
//!
//! Light/dark toggle. Purely cosmetic, not persisted.

use leptos::prelude::*;

use crate::metrics::Theme;

#[component]
pub fn ThemeSwitch(
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    view! {
        <label class="theme-switch" title="Dark mode">
            <input
                type="checkbox"
                prop:checked=move || theme.get().is_dark()
                on:change=move |_| set_theme.update(|t| *t = t.toggled())
            />
            <span class="theme-switch-slider"></span>
        </label>
    }
}
