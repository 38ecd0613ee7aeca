//! Persisted slot format: items joined with `,`.
//!
//! Lossy for items that contain a comma; those split into several items
//! on the next load.

const DELIMITER: char = ',';

/// Join items into the slot string
pub fn encode(items: &[String]) -> String {
    items.join(&DELIMITER.to_string())
}

/// Split a slot string back into items.
///
/// An empty slot is an empty list, and empty segments are dropped so a
/// stored value can never introduce an empty item.
pub fn decode(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_slot_is_empty_list() {
        assert_eq!(decode(""), Vec::<String>::new());
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_joins_with_comma() {
        let items = vec!["milk".to_string(), "eggs".to_string()];
        assert_eq!(encode(&items), "milk,eggs");
    }

    #[test]
    fn test_comma_in_item_is_lossy() {
        let items = vec!["salt, pepper".to_string()];
        assert_eq!(decode(&encode(&items)), vec!["salt".to_string(), " pepper".to_string()]);
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(decode("a,,b,"), vec!["a".to_string(), "b".to_string()]);
    }

    proptest! {
        #[test]
        fn comma_free_items_roundtrip(items in prop::collection::vec("[^,]{1,12}", 0..8)) {
            prop_assert_eq!(decode(&encode(&items)), items);
        }
    }
}
