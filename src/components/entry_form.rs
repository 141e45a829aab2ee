//! Entry Form Component
//!
//! Controlled form for recording a single feeding event.

use leptos::prelude::*;

use crate::commands::{EntrySink, LogSink};
use crate::models::{DraftField, FeedingDraftStoreFields};
use crate::store::{new_draft_store, store_apply, store_snapshot};
use crate::time_slots::time_options;

const FIELD_CLASS: &str = "border-2 border-gray-200 rounded p-2 w-full";

/// Feeding entry form (date, time, amount, note)
#[component]
pub fn EntryForm() -> impl IntoView {
    let store = new_draft_store();
    let sink = LogSink;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        sink.submit(&store_snapshot(&store));
    };

    view! {
        <div class="entry-form p-4">
            <h1 class="text-2xl font-bold mb-4">"Baby Eating Tracker"</h1>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block mb-2" for="entry-date">"Date:"</label>
                    <input
                        id="entry-date"
                        class=FIELD_CLASS
                        type="date"
                        name="date"
                        prop:value=move || store.date().get()
                        on:input=move |ev| store_apply(&store, DraftField::Date, &event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block mb-2" for="entry-time">"Time:"</label>
                    <select
                        id="entry-time"
                        class=FIELD_CLASS
                        name="time"
                        prop:value=move || store.time().get()
                        on:change=move |ev| store_apply(&store, DraftField::Time, &event_target_value(&ev))
                    >
                        <option value="">"Select time"</option>
                        {time_options().into_iter().map(|time| {
                            let value = time.clone();
                            view! {
                                <option
                                    value=value.clone()
                                    selected=move || store.time().get() == value
                                >
                                    {time}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block mb-2" for="entry-amount">"Amount (ml):"</label>
                    <input
                        id="entry-amount"
                        class=FIELD_CLASS
                        type="number"
                        name="amount"
                        prop:value=move || store.amount().get().as_input_value()
                        on:input=move |ev| store_apply(&store, DraftField::Amount, &event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block mb-2" for="entry-note">"Note:"</label>
                    <textarea
                        id="entry-note"
                        class=FIELD_CLASS
                        name="note"
                        prop:value=move || store.note().get()
                        on:input=move |ev| store_apply(&store, DraftField::Note, &event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-700 transition duration-300"
                >
                    "Save Entry"
                </button>
            </form>
        </div>
    }
}
