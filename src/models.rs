//! Frontend Models
//!
//! Data structures matching the persisted wire shape.

use serde::{Deserialize, Serialize};

/// A single grocery-list entry.
///
/// Field names match the REST/storage contract: the text field is
/// called `item` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub item: String,
    pub checked: bool,
}

impl Item {
    pub fn new(id: u32, text: &str) -> Self {
        Self {
            id,
            item: text.to_string(),
            checked: false,
        }
    }
}
