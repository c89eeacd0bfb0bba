//! Footer Component

use leptos::prelude::*;

/// Footer showing the unfiltered item count
#[component]
pub fn Footer(#[prop(into)] length: Signal<usize>) -> impl IntoView {
    view! {
        <footer>
            <p>
                {move || {
                    let n = length.get();
                    format!("{} List {}", n, if n == 1 { "Item" } else { "Items" })
                }}
            </p>
        </footer>
    }
}
