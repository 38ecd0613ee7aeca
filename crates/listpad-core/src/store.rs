//! List Store
//!
//! Owns the ordered item list. Every successful mutation persists the
//! full list and then notifies subscribers.

use std::cell::{Ref, RefCell};
use std::fmt;

use crate::error::ListError;
use crate::notifier::{Notifier, Observable};
use crate::storage::Storage;


/// Change notifications emitted by the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListEvent {
    ItemAdded,
    ItemRemoved,
}

impl ListEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListEvent::ItemAdded => "itemAdded",
            ListEvent::ItemRemoved => "itemRemoved",
        }
    }
}

impl fmt::Display for ListEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ListStore {
    items: RefCell<Vec<String>>,
    storage: Box<dyn Storage>,
    notifier: Notifier<ListEvent>,
}

impl ListStore {
    /// Seed with `defaults` followed by whatever storage already holds.
    ///
    /// Defaults are not deduplicated against stored items, and the seeded
    /// list is only written back on the first mutation.
    pub fn new(defaults: Vec<String>, storage: Box<dyn Storage>) -> Self {
        let mut items = defaults;
        items.extend(storage.load());
        tracing::debug!(total = items.len(), "list store seeded");
        Self {
            items: RefCell::new(items),
            storage,
            notifier: Notifier::new(),
        }
    }

    /// Append `item`. Empty text is rejected without side effects.
    pub fn add_item(&self, item: impl Into<String>) -> Result<(), ListError> {
        let item = item.into();
        if item.is_empty() {
            tracing::warn!("rejected empty item");
            return Err(ListError::EmptyItem);
        }

        self.items.borrow_mut().push(item);
        self.persist();
        tracing::debug!(total = self.total(), "item added");
        self.notify(&ListEvent::ItemAdded, &());
        Ok(())
    }

    /// Remove and return the item at `index`.
    ///
    /// An out-of-range index leaves the list untouched: nothing is
    /// persisted and no notification fires.
    pub fn remove_item(&self, index: usize) -> Result<String, ListError> {
        let removed = {
            let mut items = self.items.borrow_mut();
            let len = items.len();
            if index >= len {
                tracing::warn!(index, len, "rejected remove outside list");
                return Err(ListError::IndexOutOfRange { index, len });
            }
            items.remove(index)
        };

        self.persist();
        tracing::debug!(index, total = self.total(), "item removed");
        self.notify(&ListEvent::ItemRemoved, &());
        Ok(removed)
    }

    /// Read-only view of the live list
    pub fn items(&self) -> Ref<'_, [String]> {
        Ref::map(self.items.borrow(), Vec::as_slice)
    }

    pub fn total(&self) -> usize {
        self.items.borrow().len()
    }

    /// Write the full list. A failed write keeps the in-memory change.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.items.borrow()) {
            tracing::warn!(error = %e, "failed to persist list");
        }
    }
}

impl Observable for ListStore {
    type Event = ListEvent;
    type Args = ();

    fn notifier(&self) -> &Notifier<ListEvent> {
        &self.notifier
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("items", &self.items.borrow())
            .field("notifier", &self.notifier)
            .finish()
    }
}
