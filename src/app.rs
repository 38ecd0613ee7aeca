//! Listpad App
//!
//! Input row, list container with per-item delete controls, and the
//! total line. Element ids come from the host configuration.

use std::rc::Rc;

use leptos::prelude::*;
use listpad_core::{ListConfig, ListController, ListStore, ListView};

use crate::dom;
use crate::storage::BrowserStorage;
use crate::surface::SignalSurface;

#[component]
pub fn ListApp(config: ListConfig) -> impl IntoView {
    let surface = SignalSurface::new();

    let storage = BrowserStorage::new(config.storage_key.clone());
    let store = Rc::new(ListStore::new(config.defaults.clone(), Box::new(storage)));
    let controller = ListController::new(Rc::clone(&store));
    // Held for the component's lifetime; the store only keeps a weak subscription
    let list_view = StoredValue::new_local(ListView::mount(controller, store, surface, config.view.clone()));

    let submit = move || {
        list_view.get_value().submit();
    };

    let on_delete_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        match dom::index_from_event(&ev) {
            Some(index) => surface.fire_delete(index),
            None => tracing::warn!("delete control without a usable {}", dom::INDEX_ATTR),
        }
    };

    let ids = config.elements;
    let delete_class = config.view.delete_class;
    let delete_text = config.view.delete_text;

    view! {
        <div class="listpad">
            <div class="new-item-row">
                <input
                    id=ids.input
                    type="text"
                    placeholder="Add new item..."
                    prop:value=move || surface.input.get()
                    on:input=move |ev| surface.input.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <button id=ids.add_button type="button" on:click=move |_| submit()>
                    "Add"
                </button>
            </div>

            <div id=ids.wrapper>
                {move || {
                    let rows = surface.rows.get();
                    (!rows.is_empty()).then(|| view! {
                        <ul>
                            {rows.into_iter().map(|row| view! {
                                <li>
                                    {row.text}
                                    "  "
                                    <button
                                        class=delete_class.clone()
                                        data-index=row.index.to_string()
                                        on:click=on_delete_click
                                    >
                                        {delete_text.clone()}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    })
                }}
            </div>

            <p id=ids.total class="item-count">{move || surface.total.get()}</p>
        </div>
    }
}
