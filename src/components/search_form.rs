//! Search Form Component
//!
//! Search box bound to the store's search string; the list view
//! re-filters on every keystroke.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Search box filtering the visible items
#[component]
pub fn SearchForm() -> impl IntoView {
    let store = use_app_store();

    view! {
        <form class="search-form" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
            <label for="search">"Search"</label>
            <input
                id="search"
                type="search"
                role="searchbox"
                placeholder="Search Items"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
        </form>
    }
}
