//! Local Backend
//!
//! localStorage variant: the whole list lives as one JSON blob under a
//! fixed key, rewritten on every mutation. Loading tolerates an absent
//! key (first run hydrates to an empty list); a corrupted blob surfaces
//! as a `PersistError::Storage` so the app can fall back to empty
//! instead of crashing.

use web_sys::Storage;

use crate::models::Item;
use crate::persist::{PersistError, PersistResult};

#[derive(Clone)]
pub struct LocalBackend {
    key: String,
}

impl LocalBackend {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    pub fn load(&self) -> PersistResult<Vec<Item>> {
        let storage = storage()?;
        let raw = storage
            .get_item(&self.key)
            .map_err(|_| PersistError::Storage("failed to read localStorage".to_string()))?;
        decode_items(raw.as_deref())
    }

    pub fn save(&self, items: &[Item]) -> PersistResult<()> {
        let storage = storage()?;
        let blob = encode_items(items)?;
        storage
            .set_item(&self.key, &blob)
            .map_err(|_| PersistError::Storage("failed to write localStorage".to_string()))
    }
}

fn storage() -> PersistResult<Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| PersistError::Storage("localStorage unavailable".to_string()))
}

fn decode_items(raw: Option<&str>) -> PersistResult<Vec<Item>> {
    match raw {
        None => Ok(Vec::new()),
        Some(blob) => serde_json::from_str(blob)
            .map_err(|e| PersistError::Storage(format!("stored list is corrupted: {}", e))),
    }
}

fn encode_items(items: &[Item]) -> PersistResult<String> {
    serde_json::to_string(items).map_err(|e| PersistError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn round_trip_preserves_items_and_order() {
        let items = vec![
            Item { id: 1, item: "Eggs".into(), checked: true },
            Item { id: 3, item: "Milk".into(), checked: false },
        ];
        let blob = encode_items(&items).unwrap();
        let loaded = decode_items(Some(&blob)).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn absent_key_hydrates_to_empty_list() {
        assert_eq!(decode_items(None).unwrap(), Vec::<Item>::new());
    }

    #[test]
    fn corrupted_blob_is_a_storage_error() {
        let err = decode_items(Some("not json")).unwrap_err();
        assert!(matches!(err, PersistError::Storage(_)));
    }

    #[test]
    fn wire_field_names_match_contract() {
        let blob = encode_items(&[Item::new(1, "Eggs")]).unwrap();
        assert_eq!(blob, r#"[{"id":1,"item":"Eggs","checked":false}]"#);
    }
}
