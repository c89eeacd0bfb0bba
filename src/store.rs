//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The item
//! list itself is a plain `ListState` value swapped wholesale on every
//! mutation; only this module's `AppState` is reactive.

use crate::list::ListState;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The grocery list, single source of truth for the UI
    pub list: ListState,
    /// Current search box contents
    pub search: String,
    /// Last surfaced backend error, if any
    pub fetch_error: Option<String>,
    /// True until the initial load has settled
    pub is_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in the next list state
pub fn store_set_list(store: &AppStore, next: ListState) {
    store.list().set(next);
}

/// Surface (or clear) the user-visible backend error
pub fn store_set_error(store: &AppStore, message: Option<String>) {
    store.fetch_error().set(message);
}
