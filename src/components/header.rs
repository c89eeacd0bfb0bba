//! Header Component

use leptos::prelude::*;

/// Page header with the list title
#[component]
pub fn Header(
    #[prop(into, default = "Default Title".to_string())] title: String,
) -> impl IntoView {
    view! {
        <header>
            <h1>{title}</h1>
        </header>
    }
}
