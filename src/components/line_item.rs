//! Line Item Component
//!
//! One checklist row: checkbox, label, delete button. The checkbox and
//! a double-click on the label both toggle; checked rows render struck
//! through.

use leptos::prelude::*;

use crate::actions;
use crate::context::AppContext;
use crate::models::Item;
use crate::store::use_app_store;

/// A single grocery-list row
#[component]
pub fn LineItem(item: Item) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let checked = item.checked;
    let toggle_backend = ctx.backend.clone();
    let dblclick_backend = ctx.backend.clone();
    let delete_backend = ctx.backend;

    view! {
        <li class="item">
            <input
                type="checkbox"
                checked=checked
                on:change=move |_| actions::toggle_item(store, toggle_backend.clone(), id)
            />
            <label
                style=if checked { "text-decoration: line-through;" } else { "" }
                on:dblclick=move |_| actions::toggle_item(store, dblclick_backend.clone(), id)
            >
                {item.item}
            </label>
            <button
                class="delete-btn"
                aria-label="Delete Item"
                on:click=move |_| actions::delete_item(store, delete_backend.clone(), id)
            >
                "×"
            </button>
        </li>
    }
}
