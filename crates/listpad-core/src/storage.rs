//! Persistence collaborators for the list store.

use std::cell::RefCell;
use std::rc::Rc;

use crate::codec;
use crate::error::StorageError;

/// A single persisted slot holding the whole list.
///
/// `load` never fails: a missing slot or missing storage facility reads
/// as an empty list.
pub trait Storage {
    fn load(&self) -> Vec<String>;

    fn save(&self, items: &[String]) -> Result<(), StorageError>;
}

/// In-memory slot holding the encoded string.
///
/// Clones share the same slot, so a second store built from a clone sees
/// what the first one saved (a page reload, in tests).
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw slot value, as if written by an earlier session
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Current raw slot value, `None` if never written
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Vec<String> {
        self.slot.borrow().as_deref().map(codec::decode).unwrap_or_default()
    }

    fn save(&self, items: &[String]) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(codec::encode(items));
        Ok(())
    }
}

/// No persistence facility at all: loads nothing, saves nowhere
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStorage;

impl Storage for NullStorage {
    fn load(&self) -> Vec<String> {
        Vec::new()
    }

    fn save(&self, _items: &[String]) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load().is_empty());
        assert_eq!(storage.raw(), None);
    }

    #[test]
    fn test_memory_storage_shares_slot_between_clones() {
        let storage = MemoryStorage::new();
        let reloaded = storage.clone();
        storage.save(&["milk".to_string(), "eggs".to_string()]).unwrap();

        assert_eq!(reloaded.raw().as_deref(), Some("milk,eggs"));
        assert_eq!(reloaded.load(), vec!["milk".to_string(), "eggs".to_string()]);
    }

    #[test]
    fn test_empty_list_saved_as_empty_string() {
        let storage = MemoryStorage::with_raw("milk");
        storage.save(&[]).unwrap();
        assert_eq!(storage.raw().as_deref(), Some(""));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_null_storage_degrades_to_empty() {
        let storage = NullStorage;
        assert!(storage.save(&["milk".to_string()]).is_ok());
        assert!(storage.load().is_empty());
    }
}
