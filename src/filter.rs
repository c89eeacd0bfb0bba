//! Search Filter
//!
//! Pure projection of the item list through the search box.

use crate::models::Item;

/// Items whose text contains `query` as a case-insensitive substring,
/// in store order. An empty query keeps everything.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(texts: &[&str]) -> Vec<Item> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Item::new(i as u32 + 1, text))
            .collect()
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let items = make_items(&["Eggs", "Milk", "Bread"]);
        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn query_is_case_insensitive() {
        let items = make_items(&["Milk"]);
        let found = filter_items(&items, "MILK");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item, "Milk");
    }

    #[test]
    fn matches_substrings_and_keeps_order() {
        let items = make_items(&["Oat milk", "Bread", "Milk"]);
        let found = filter_items(&items, "mi");
        let texts: Vec<&str> = found.iter().map(|item| item.item.as_str()).collect();
        assert_eq!(texts, vec!["Oat milk", "Milk"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let items = make_items(&["Eggs"]);
        assert!(filter_items(&items, "tofu").is_empty());
    }
}
