//! Entry Form State Store
//!
//! Uses Leptos reactive_stores so each input only tracks its own field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Amount, DraftField, FeedingDraft, FeedingDraftStoreFields};

/// Type alias for the draft store
pub type DraftStore = Store<FeedingDraft>;

/// New store seeded with today's date
pub fn new_draft_store() -> DraftStore {
    Store::new(FeedingDraft::for_today())
}

/// Replace one field of the draft from raw input text, leaving the others untouched
pub fn store_apply(store: &DraftStore, field: DraftField, value: &str) {
    match field {
        DraftField::Date => *store.date().write() = value.to_string(),
        DraftField::Time => *store.time().write() = value.to_string(),
        DraftField::Amount => *store.amount().write() = Amount::parse(value),
        DraftField::Note => *store.note().write() = value.to_string(),
    }
}

/// Current draft without subscribing
pub fn store_snapshot(store: &DraftStore) -> FeedingDraft {
    store.get_untracked()
}
