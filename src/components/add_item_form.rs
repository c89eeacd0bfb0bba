//! Add Item Form Component
//!
//! Text input plus submit button for appending new items.

use leptos::html;
use leptos::prelude::*;

use crate::actions;
use crate::context::AppContext;
use crate::store::use_app_store;

/// Form for adding a new item to the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        actions::add_item(store, ctx.backend.clone(), text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="add-form" on:submit=handle_submit>
            <label for="addItem">"Add Item"</label>
            <input
                node_ref=input_ref
                id="addItem"
                type="text"
                autofocus=true
                placeholder="Add Item"
                required=true
                prop:value=new_text
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button
                type="submit"
                aria-label="Add Item"
                // Keep focus in the input after clicking the button
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        let _ = input.focus();
                    }
                }
            >
                "+"
            </button>
        </form>
    }
}
