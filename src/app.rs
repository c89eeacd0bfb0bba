//! Grocery List App
//!
//! Root component: builds the store, picks the persistence backend,
//! hydrates on mount, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AddItemForm, Footer, Header, ItemList, SearchForm};
use crate::context::AppContext;
use crate::filter::filter_items;
use crate::persist::Backend;
use crate::store::{AppState, AppStateStoreFields};

/// json-server style REST endpoint for the remote backend
const API_URL: &str = "http://localhost:3500/items";
/// localStorage key for the local backend
const STORAGE_KEY: &str = "grocery_list";
/// Backend flavor for this build
const USE_REMOTE: bool = false;

fn configured_backend() -> Backend {
    if USE_REMOTE {
        Backend::remote(API_URL)
    } else {
        Backend::local(STORAGE_KEY)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let backend = configured_backend();
    provide_context(AppContext::new(backend.clone()));

    // Hydrate from the backend on mount
    Effect::new(move |_| {
        actions::load_items(store, backend.clone());
    });

    // Search projection over the list, recomputed on every keystroke
    // and every store mutation
    let filtered = Memo::new(move |_| {
        let list = store.list().get();
        filter_items(list.items(), &store.search().get())
    });
    let total = Memo::new(move |_| store.list().get().len());

    view! {
        <div class="app">
            <Header title="Groceries List" />
            <AddItemForm />
            <SearchForm />
            <main>
                <Show when=move || store.is_loading().get()>
                    <p>"Loading Items ..."</p>
                </Show>
                {move || {
                    store
                        .fetch_error()
                        .get()
                        .map(|err| view! { <p class="error">{format!("Error: {}", err)}</p> })
                }}
                <Show when=move || {
                    !store.is_loading().get() && store.fetch_error().get().is_none()
                }>
                    <ItemList items=filtered />
                </Show>
            </main>
            <Footer length=total />
        </div>
    }
}
