//! List Controller
//!
//! Stateless pass-through from the presentation layer to the store.

use std::rc::Rc;

use crate::error::ListError;
use crate::store::ListStore;

#[derive(Clone, Debug)]
pub struct ListController {
    store: Rc<ListStore>,
}

impl ListController {
    pub fn new(store: Rc<ListStore>) -> Self {
        Self { store }
    }

    pub fn add_item(&self, text: impl Into<String>) -> Result<(), ListError> {
        self.store.add_item(text)
    }

    pub fn remove_item(&self, index: usize) -> Result<String, ListError> {
        self.store.remove_item(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NullStorage;

    #[test]
    fn test_forwards_to_store() {
        let store = Rc::new(ListStore::new(vec!["milk".to_string()], Box::new(NullStorage)));
        let controller = ListController::new(Rc::clone(&store));

        controller.add_item("eggs").unwrap();
        assert_eq!(store.total(), 2);

        assert_eq!(controller.remove_item(0).unwrap(), "milk");
        assert_eq!(&*store.items(), &["eggs".to_string()][..]);
    }

    #[test]
    fn test_forwards_errors_unchanged() {
        let store = Rc::new(ListStore::new(Vec::new(), Box::new(NullStorage)));
        let controller = ListController::new(store);

        assert_eq!(controller.add_item(""), Err(ListError::EmptyItem));
        assert_eq!(controller.remove_item(0), Err(ListError::IndexOutOfRange { index: 0, len: 0 }));
    }
}
