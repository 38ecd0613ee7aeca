//! List View
//!
//! Render logic for the list widget, written against a `Surface` so the
//! DOM (or any other toolkit) stays behind a small interface.

use std::rc::Rc;

use crate::config::ViewConfig;
use crate::controller::ListController;
use crate::notifier::Observable;
use crate::store::{ListEvent, ListStore};

/// One rendered list entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    pub index: usize,
    pub text: String,
}

/// Click handler for delete controls, given the control's index
pub type DeleteHandler = Rc<dyn Fn(usize)>;

/// UI collaborator the view renders into
pub trait Surface {
    /// Current text of the input element
    fn input_text(&self) -> String;

    fn clear_input(&self);

    /// Blocking user-facing warning
    fn warn(&self, message: &str);

    /// Replace the list container's content. Empty rows clear it.
    fn set_content(&self, rows: Vec<ItemRow>);

    /// Replace the total display's text
    fn set_text(&self, text: &str);

    /// (Re-)attach `handler` to every delete control marked with `marker`
    fn on_delete(&self, marker: &str, handler: DeleteHandler);
}

pub fn render_rows(items: &[String]) -> Vec<ItemRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, text)| ItemRow { index, text: text.clone() })
        .collect()
}

/// "1 item in the list." for exactly one item, plural otherwise
pub fn total_text(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} in the list.", count, noun)
}

pub struct ListView<S: Surface> {
    controller: ListController,
    store: Rc<ListStore>,
    surface: S,
    config: ViewConfig,
}

impl<S: Surface + 'static> ListView<S> {
    /// Subscribe to store changes and render once
    pub fn mount(controller: ListController, store: Rc<ListStore>, surface: S, config: ViewConfig) -> Rc<Self> {
        let view = Rc::new(Self {
            controller,
            store,
            surface,
            config,
        });

        view.store
            .attach_bound(ListEvent::ItemAdded, &view, Self::on_store_change)
            .attach_bound(ListEvent::ItemRemoved, &view, Self::on_store_change);

        view.build_list_item();
        view
    }

    /// Add-trigger activation. Returns whether an item was added.
    pub fn submit(&self) -> bool {
        let text = self.surface.input_text();
        if text.trim().is_empty() {
            self.surface.warn(&self.config.alert_text);
            return false;
        }

        match self.controller.add_item(text) {
            Ok(()) => {
                self.surface.clear_input();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "add rejected");
                false
            }
        }
    }

    /// Regenerate the list container and the total display
    pub fn build_list_item(&self) {
        let rows = render_rows(&self.store.items());
        let total = rows.len();
        tracing::debug!(total, "rendering list");

        if rows.is_empty() {
            self.surface.set_content(Vec::new());
            self.surface.set_text(&total_text(0));
            return;
        }

        self.surface.set_content(rows);
        self.attach_listener();
        self.surface.set_text(&total_text(total));
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn attach_listener(&self) {
        let controller = self.controller.clone();
        let handler: DeleteHandler = Rc::new(move |index| {
            if let Err(e) = controller.remove_item(index) {
                tracing::warn!(error = %e, "delete rejected");
            }
        });
        self.surface.on_delete(&self.config.delete_class, handler);
    }

    fn on_store_change(&self, _: &()) {
        self.build_list_item();
    }
}
