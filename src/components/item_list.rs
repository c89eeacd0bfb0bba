//! Item List Component

use leptos::prelude::*;

use crate::components::LineItem;
use crate::models::Item;

/// Checklist view over the filtered items
#[component]
pub fn ItemList(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    view! {
        <Show when=move || items.get().is_empty()>
            <p class="empty-note">"Your list is empty."</p>
        </Show>
        <ul class="item-list">
            <For
                each=move || items.get()
                // Keyed on (id, checked) so toggling re-renders the row
                key=|item| (item.id, item.checked)
                children=move |item| {
                    view! { <LineItem item=item /> }
                }
            />
        </ul>
    }
}
