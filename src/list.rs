//! List State
//!
//! The authoritative in-memory item list. Mutations return a new
//! `ListState` value instead of writing through shared reactive state;
//! the caller decides what to do with the result (swap it into the
//! store, hand the delta to the persistence backend).

use crate::models::Item;

/// Ordered item list plus the id counter for the next insertion.
///
/// Ids are allocated from a monotonic counter rather than
/// last-element-id + 1, so deleting the tail and re-adding can never
/// hand out a duplicate id.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    next_id: u32,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Adopt a sequence loaded from the backend, seeding the counter
    /// past every id already present.
    pub fn hydrate(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    /// Append a new unchecked item. Returns the next state and the
    /// created item, or `None` when `text` is empty/whitespace.
    pub fn add(&self, text: &str) -> Option<(Self, Item)> {
        if text.trim().is_empty() {
            return None;
        }
        let item = Item::new(self.next_id, text);
        let mut next = self.clone();
        next.items.push(item.clone());
        next.next_id += 1;
        Some((next, item))
    }

    /// Negate the checked flag of the item with `id`. Returns the next
    /// state and the new checked value, or `None` when `id` is absent.
    pub fn toggle(&self, id: u32) -> Option<(Self, bool)> {
        let mut next = self.clone();
        let item = next.items.iter_mut().find(|item| item.id == id)?;
        item.checked = !item.checked;
        let checked = item.checked;
        Some((next, checked))
    }

    /// Drop the item with `id`. Returns `None` when `id` is absent.
    pub fn remove(&self, id: u32) -> Option<Self> {
        if !self.items.iter().any(|item| item.id == id) {
            return None;
        }
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);
        Some(next)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_items;
    use crate::models::Item;

    /// The id strategy the original app used: last element's id + 1.
    fn naive_next_id(items: &[Item]) -> u32 {
        items.last().map(|item| item.id + 1).unwrap_or(1)
    }

    fn state_of(texts: &[&str]) -> ListState {
        let mut state = ListState::new();
        for text in texts {
            state = state.add(text).unwrap().0;
        }
        state
    }

    #[test]
    fn add_appends_with_increasing_ids() {
        let state = state_of(&["Eggs", "Milk"]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[0].id, 1);
        assert_eq!(state.items()[1].id, 2);
        assert!(state.items().iter().all(|item| !item.checked));
    }

    #[test]
    fn add_refuses_blank_text() {
        let state = ListState::new();
        assert!(state.add("").is_none());
        assert!(state.add("   ").is_none());
    }

    #[test]
    fn naive_id_strategy_duplicates_after_tail_delete() {
        // Delete the tail out of order, then add: last+1 re-issues id 2.
        let items = vec![Item::new(1, "Eggs"), Item::new(2, "Milk")];
        let after_delete: Vec<Item> =
            items.into_iter().filter(|item| item.id != 2).collect();
        assert_eq!(naive_next_id(&after_delete), 2);
    }

    #[test]
    fn counter_id_strategy_never_reuses_after_delete() {
        let state = state_of(&["Eggs", "Milk"]);
        let state = state.remove(2).unwrap();
        let (state, item) = state.add("Bread").unwrap();
        assert_eq!(item.id, 3);
        let ids: Vec<u32> = state.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn hydrate_seeds_counter_past_loaded_ids() {
        let state = ListState::hydrate(vec![Item::new(4, "Eggs"), Item::new(7, "Milk")]);
        let (_, item) = state.add("Bread").unwrap();
        assert_eq!(item.id, 8);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let state = state_of(&["Eggs"]);
        let (once, checked) = state.toggle(1).unwrap();
        assert!(checked);
        let (twice, checked) = once.toggle(1).unwrap();
        assert!(!checked);
        assert_eq!(twice, state);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let state = state_of(&["Eggs"]);
        assert!(state.toggle(99).is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let state = state_of(&["Eggs", "Milk"]);
        let removed = state.remove(1).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(removed.remove(1).is_none());
    }

    #[test]
    fn end_to_end_scenario() {
        let state = ListState::new();
        let (state, _) = state.add("Eggs").unwrap();
        assert_eq!(
            state.items(),
            &[Item { id: 1, item: "Eggs".into(), checked: false }]
        );
        let (state, _) = state.add("Milk").unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[1], Item { id: 2, item: "Milk".into(), checked: false });

        let (state, checked) = state.toggle(1).unwrap();
        assert!(checked);
        assert!(state.items()[0].checked);

        let state = state.remove(1).unwrap();
        assert_eq!(state.items().iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);

        let visible = filter_items(state.items(), "mi");
        assert_eq!(
            visible,
            vec![Item { id: 2, item: "Milk".into(), checked: false }]
        );
    }
}
