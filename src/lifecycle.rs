//! Component Lifecycle Helpers
//!
//! Cancellation for async work started by a component.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// Shared flag flipped when the owning component unmounts.
///
/// Clones observe the same flag, so one copy goes to `on_cleanup`
/// and another travels with the spawned future.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Hand `value` to `apply` unless cancelled. Returns whether it was applied.
    pub fn apply_if_live<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        apply(value);
        true
    }
}

/// Token cancelled when the current reactive owner is cleaned up
pub fn cancel_on_cleanup() -> CancelToken {
    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });
    token
}
