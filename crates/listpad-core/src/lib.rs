//! Listpad Core
//!
//! UI-agnostic pieces of the list widget:
//! - notifier: event registry with ordered dispatch
//! - store: the persisted item list, exclusive mutator
//! - controller: pass-through from the presentation layer to the store
//! - view: render logic against an abstract `Surface`
//! - storage / codec: the single comma-joined persistence slot

mod error;
mod notifier;
mod codec;
mod storage;
mod store;
mod controller;
mod view;
mod config;

pub use error::{ListError, StorageError, ConfigError};
pub use notifier::{Notifier, Observable};
pub use codec::{encode, decode};
pub use storage::{Storage, MemoryStorage, NullStorage};
pub use store::{ListStore, ListEvent};
pub use controller::ListController;
pub use view::{ListView, Surface, ItemRow, DeleteHandler, render_rows, total_text};
pub use config::{ListConfig, ElementIds, ViewConfig};
