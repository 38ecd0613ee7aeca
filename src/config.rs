//! Host configuration lookup.
//!
//! A host page may embed
//! `<script type="application/json" id="listpad-config">{...}</script>`;
//! without it every setting takes its default.

use listpad_core::{ConfigError, ListConfig};

const CONFIG_ELEMENT_ID: &str = "listpad-config";

pub fn load_config() -> Result<ListConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => ListConfig::from_json(&raw),
        _ => Ok(ListConfig::default()),
    }
}
