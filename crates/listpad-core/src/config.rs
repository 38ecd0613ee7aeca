//! Host-facing configuration.
//!
//! Every field has a default, so a host only supplies what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// DOM ids of the four bound elements
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub add_button: String,
    pub input: String,
    pub wrapper: String,
    pub total: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            add_button: "add_button".to_string(),
            input: "item_input".to_string(),
            wrapper: "item_list".to_string(),
            total: "item_total".to_string(),
        }
    }
}

/// User-facing strings and the delete-control marker class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub alert_text: String,
    pub delete_text: String,
    pub delete_class: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            alert_text: "Please fill the textbox..".to_string(),
            delete_text: "Delete".to_string(),
            delete_class: "btn_delete".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub elements: ElementIds,
    pub view: ViewConfig,
    /// Items placed ahead of the persisted ones at startup
    pub defaults: Vec<String>,
    /// Name of the persisted slot
    pub storage_key: String,
    /// `tracing` filter directives
    pub log_level: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            view: ViewConfig::default(),
            defaults: Vec::new(),
            storage_key: "G_Items".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ListConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ListConfig::from_json("{}").unwrap();
        assert_eq!(config, ListConfig::default());
        assert!(config.defaults.is_empty());
        assert_eq!(config.storage_key, "G_Items");
        assert_eq!(config.view.delete_class, "btn_delete");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ListConfig::from_json(
            r#"{"view": {"delete_text": "Remove"}, "elements": {"total": "count"}}"#,
        )
        .unwrap();

        assert_eq!(config.view.delete_text, "Remove");
        assert_eq!(config.view.alert_text, "Please fill the textbox..");
        assert_eq!(config.elements.total, "count");
        assert_eq!(config.elements.input, "item_input");
    }

    #[test]
    fn test_defaults_seed_store_ahead_of_persisted() {
        use crate::{ListStore, MemoryStorage};

        let config = ListConfig::from_json(r#"{"defaults": ["milk"]}"#).unwrap();
        assert_eq!(config.defaults, vec!["milk".to_string()]);

        let storage = MemoryStorage::with_raw("eggs");
        let store = ListStore::new(config.defaults.clone(), Box::new(storage));
        assert_eq!(&*store.items(), &["milk".to_string(), "eggs".to_string()][..]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(ListConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
