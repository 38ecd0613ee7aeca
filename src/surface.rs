//! Signal Surface
//!
//! `Surface` backed by Leptos signals. `ListApp` renders the signals into
//! the bound elements; the list view only ever writes them.

use leptos::prelude::*;
use listpad_core::{DeleteHandler, ItemRow, Surface};

#[derive(Clone, Copy)]
pub struct SignalSurface {
    /// Text input value
    pub input: RwSignal<String>,
    /// Rows shown in the list container
    pub rows: RwSignal<Vec<ItemRow>>,
    /// Total display text
    pub total: RwSignal<String>,
    delete: StoredValue<Option<DeleteHandler>, LocalStorage>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(String::new()),
            delete: StoredValue::new_local(None),
        }
    }

    /// Run the attached delete handler for the control at `index`
    pub fn fire_delete(&self, index: usize) {
        // Clone out first: the handler re-renders and re-attaches
        if let Some(handler) = self.delete.get_value() {
            handler(index);
        }
    }
}

impl Surface for SignalSurface {
    fn input_text(&self) -> String {
        self.input.get_untracked()
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn warn(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.alert_with_message(message) {
                tracing::warn!(error = ?e, "failed to show warning");
            }
        }
    }

    fn set_content(&self, rows: Vec<ItemRow>) {
        self.rows.set(rows);
    }

    fn set_text(&self, text: &str) {
        self.total.set(text.to_string());
    }

    fn on_delete(&self, marker: &str, handler: DeleteHandler) {
        tracing::trace!(marker, "delete handlers attached");
        self.delete.set_value(Some(handler));
    }
}
