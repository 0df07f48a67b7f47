// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # ChatRelay Store
//!
//! Persistent state for ChatRelay.
//!
//! This crate provides:
//!
//! - **SettingsStore**: User preferences with persistence
//! - **Persistence**: File I/O helpers for JSON data and export documents
//!
//! ## Usage
//!
//! ```ignore
//! use chatrelay_store::{SettingsStore, write_export};
//!
//! let store = SettingsStore::load_default().await?;
//! let settings = store.get().await;
//!
//! let dir = settings.export_dir.clone().unwrap_or_else(|| ".".into());
//! let path = write_export(&dir, &document).await?;
//! ```

pub mod error;
pub mod persistence;
pub mod settings_store;

pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_settings_path, ensure_dir, load_json, load_json_or_default,
    save_json, write_export, write_export_to,
};
pub use settings_store::{
    DeliveryPreferences, ExtractionPreferences, LogLevel, SETTING_KEYS, Settings, SettingsStore,
};

#[cfg(test)]
mod persistence_tests;
