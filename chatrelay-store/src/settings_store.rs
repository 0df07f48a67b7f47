//! User preferences store.
//!
//! Manages user settings with persistence. Settings are a flat JSON file
//! where every field has a default, so partial or older files still load.

use chatrelay_core::DEFAULT_BUDGET;
use chatrelay_dom::{DeliverySettings, ExtractSettings, PasteModifier};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json, save_json};

// ============================================================================
// Settings Types
// ============================================================================

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Character budget for condensed prompts.
    pub condense_budget: usize,

    /// Deliver the condensed prompt instead of the full transcript on import.
    pub use_condensed: bool,

    /// Extraction preferences.
    pub extraction: ExtractionPreferences,

    /// Delivery preferences.
    pub delivery: DeliveryPreferences,

    /// Directory export files are written to. Current directory when unset.
    pub export_dir: Option<PathBuf>,

    /// Log level.
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            condense_budget: DEFAULT_BUDGET,
            use_condensed: false,
            extraction: ExtractionPreferences::default(),
            delivery: DeliveryPreferences::default(),
            export_dir: None,
            log_level: LogLevel::default(),
        }
    }
}

/// Extraction preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionPreferences {
    /// Allow the generic alternation fallbacks.
    pub generic_fallback: bool,
}

impl Default for ExtractionPreferences {
    fn default() -> Self {
        Self {
            generic_fallback: true,
        }
    }
}

/// Delivery preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeliveryPreferences {
    /// Copy to the system clipboard.
    pub clipboard: bool,
    /// Dispatch a synthetic paste event.
    pub synthetic_paste: bool,
    /// Dispatch the paste keyboard shortcut.
    pub paste_shortcut: bool,
}

impl Default for DeliveryPreferences {
    fn default() -> Self {
        Self {
            clipboard: true,
            synthetic_paste: true,
            paste_shortcut: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Error level logging.
    Error,
    /// Warning level logging.
    #[default]
    Warn,
    /// Info level logging.
    Info,
    /// Debug level logging.
    Debug,
    /// Trace level logging.
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(StoreError::InvalidValue {
                key: "log_level".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Keys accepted by [`Settings::set`].
pub const SETTING_KEYS: &[&str] = &[
    "condense_budget",
    "use_condensed",
    "extraction.generic_fallback",
    "delivery.clipboard",
    "delivery.synthetic_paste",
    "delivery.paste_shortcut",
    "export_dir",
    "log_level",
];

impl Settings {
    /// Extraction settings for the page adapters.
    pub fn to_extract_settings(&self) -> ExtractSettings {
        ExtractSettings {
            generic_fallback: self.extraction.generic_fallback,
        }
    }

    /// Delivery settings for the delivery pipeline.
    pub fn to_delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            clipboard: self.delivery.clipboard,
            synthetic_paste: self.delivery.synthetic_paste,
            paste_shortcut: self.delivery.paste_shortcut,
            paste_modifier: PasteModifier::for_current_os(),
        }
    }

    /// Directory exports go to.
    pub fn export_dir(&self) -> &Path {
        self.export_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Sets one value by dotted key.
    ///
    /// An empty value (or `none`) clears `export_dir`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let value = value.trim();
        match key {
            "condense_budget" => {
                self.condense_budget = match value.parse::<usize>() {
                    Ok(budget) if budget > 0 => budget,
                    _ => return Err(invalid(key, value)),
                };
            }
            "use_condensed" => self.use_condensed = parse_bool(key, value)?,
            "extraction.generic_fallback" => {
                self.extraction.generic_fallback = parse_bool(key, value)?;
            }
            "delivery.clipboard" => self.delivery.clipboard = parse_bool(key, value)?,
            "delivery.synthetic_paste" => self.delivery.synthetic_paste = parse_bool(key, value)?,
            "delivery.paste_shortcut" => self.delivery.paste_shortcut = parse_bool(key, value)?,
            "export_dir" => {
                self.export_dir = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "log_level" => self.log_level = value.parse()?,
            _ => return Err(StoreError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> StoreError {
    StoreError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, StoreError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Persistent settings store.
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store with default settings backed by `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Settings::default())),
            path,
        }
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path.
    ///
    /// A missing or unreadable file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            load_json(&path).await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load settings, using defaults");
                Settings::default()
            })
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings in memory.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        f(&mut settings);
    }

    /// Sets one value by dotted key, in memory.
    ///
    /// # Errors
    ///
    /// Returns error for unknown keys or values that don't fit the key.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.settings.write().await.set(key, value)?;
        debug!(key, value, "Setting updated");
        Ok(())
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Restores defaults and removes the backing file.
    ///
    /// Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be removed.
    pub async fn reset(&self) -> Result<bool, StoreError> {
        *self.settings.write().await = Settings::default();

        if self.path.exists() {
            tokio::fs::remove_file(&self.path).await?;
            info!(path = %self.path.display(), "Settings reset");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// Gets the condense budget.
    pub async fn condense_budget(&self) -> usize {
        self.settings.read().await.condense_budget
    }

    /// Gets the extraction settings.
    pub async fn extract_settings(&self) -> ExtractSettings {
        self.settings.read().await.to_extract_settings()
    }

    /// Gets the delivery settings.
    pub async fn delivery_settings(&self) -> DeliverySettings {
        self.settings.read().await.to_delivery_settings()
    }
}

// ============================================================================
// Tests
// ============================================================================
