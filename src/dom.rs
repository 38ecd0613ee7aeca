//! DOM helpers for generated controls.

use wasm_bindgen::JsCast;

/// Attribute carrying a delete control's list position
pub const INDEX_ATTR: &str = "data-index";

/// Read the list position stored on the control that handled `ev`
pub fn index_from_event(ev: &web_sys::Event) -> Option<usize> {
    ev.current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .get_attribute(INDEX_ATTR)?
        .parse()
        .ok()
}
