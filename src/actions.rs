//! Mutation Orchestration
//!
//! Each UI mutation applies to the store optimistically, then issues
//! exactly one backend sync. A failed sync surfaces as the user-visible
//! error message; the list is not rolled back, so a second mutation can
//! be issued while an earlier sync is still in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::list::ListState;
use crate::models::Item;
use crate::persist::{Backend, Change};
use crate::store::{store_set_error, store_set_list, AppStateStoreFields, AppStore};

/// Hydrate the store from the backend.
pub fn load_items(store: AppStore, backend: Backend) {
    spawn_local(async move {
        match backend.load().await {
            Ok(items) => {
                web_sys::console::log_1(&format!("[APP] loaded {} items", items.len()).into());
                store_set_list(&store, ListState::hydrate(items));
                store_set_error(&store, None);
            }
            Err(err) => store_set_error(&store, Some(err.to_string())),
        }
        store.is_loading().set(false);
    });
}

/// Append a new item. Blank text is refused before anything mutates.
pub fn add_item(store: AppStore, backend: Backend, text: String) {
    let current = store.list().get();
    let Some((next, item)) = current.add(&text) else {
        return;
    };
    apply_and_sync(store, backend, next, Change::Added(item));
}

/// Flip the checked flag of `id`. Unknown ids are a no-op.
pub fn toggle_item(store: AppStore, backend: Backend, id: u32) {
    let current = store.list().get();
    let Some((next, checked)) = current.toggle(id) else {
        return;
    };
    apply_and_sync(store, backend, next, Change::Toggled { id, checked });
}

/// Drop `id` from the list. Unknown ids are a no-op.
pub fn delete_item(store: AppStore, backend: Backend, id: u32) {
    let current = store.list().get();
    let Some(next) = current.remove(id) else {
        return;
    };
    apply_and_sync(store, backend, next, Change::Removed(id));
}

fn apply_and_sync(store: AppStore, backend: Backend, next: ListState, change: Change) {
    let snapshot: Vec<Item> = next.items().to_vec();
    store_set_list(&store, next);
    spawn_local(async move {
        if let Err(err) = backend.sync(&change, &snapshot).await {
            store_set_error(&store, Some(err.to_string()));
        }
    });
}
