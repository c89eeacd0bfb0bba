//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod footer;
mod header;
mod item_list;
mod line_item;
mod search_form;

pub use add_item_form::AddItemForm;
pub use footer::Footer;
pub use header::Header;
pub use item_list::ItemList;
pub use line_item::LineItem;
pub use search_form::SearchForm;
