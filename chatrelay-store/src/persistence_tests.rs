//! Persistence round-trip and edge case tests.
//!
//! Tests file I/O operations, settings persistence, and export files.

use std::path::PathBuf;
use tempfile::TempDir;

use chatrelay_core::{ExportDocument, Message, PlatformKind, Role, parse_import};

use crate::persistence::{ensure_dir, load_json, load_json_or_default, save_json, write_export};
use crate::settings_store::{LogLevel, Settings, SettingsStore};

// ============================================================================
// JSON Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_load_json_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.json");

    let mut settings = Settings::default();
    settings.condense_budget = 2500;
    settings.log_level = LogLevel::Debug;

    save_json(&file_path, &settings).await.unwrap();
    let loaded: Settings = load_json(&file_path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("deeply").join("nested").join("test.json");

    let data = serde_json::json!({"key": "value"});

    save_json(&nested_path, &data).await.unwrap();
    assert!(nested_path.exists());
}

#[tokio::test]
async fn test_load_nonexistent_file() {
    let file_path = PathBuf::from("/nonexistent/path/settings.json");

    let result: Result<Settings, _> = load_json(&file_path).await;
    assert!(result.is_err());

    let settings: Settings = load_json_or_default(&file_path).await;
    assert_eq!(settings, Settings::default());
}

#[tokio::test]
async fn test_ensure_dir_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let new_dir = temp_dir.path().join("exports");

    ensure_dir(&new_dir).await.unwrap();
    assert!(new_dir.is_dir());

    // Second call is a no-op
    ensure_dir(&new_dir).await.unwrap();
}

// ============================================================================
// Settings Store Tests
// ============================================================================

#[tokio::test]
async fn test_settings_store_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::load(path.clone()).await.unwrap();
    assert_eq!(store.get().await, Settings::default());

    store.set("use_condensed", "true").await.unwrap();
    store.update(|s| s.condense_budget = 1200).await;
    store.save().await.unwrap();

    let reloaded = SettingsStore::load(path).await.unwrap();
    let settings = reloaded.get().await;
    assert!(settings.use_condensed);
    assert_eq!(reloaded.condense_budget().await, 1200);
}

#[tokio::test]
async fn test_settings_store_invalid_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    let store = SettingsStore::load(path).await.unwrap();
    assert_eq!(store.get().await, Settings::default());
}

#[tokio::test]
async fn test_settings_store_reset() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let store = SettingsStore::new(path.clone());
    store.set("delivery.clipboard", "false").await.unwrap();
    store.save().await.unwrap();
    assert!(!store.delivery_settings().await.clipboard);

    assert!(store.reset().await.unwrap());
    assert!(!path.exists());
    assert!(store.delivery_settings().await.clipboard);
    assert!(!store.reset().await.unwrap());
}

// ============================================================================
// Export File Tests
// ============================================================================

#[tokio::test]
async fn test_write_export_uses_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let messages = vec![
        Message::text(Role::User, "Hello"),
        Message::text(Role::Assistant, "Hi!"),
    ]
    .into();
    let document = ExportDocument::new(PlatformKind::Gemini, messages, "https://gemini.google.com/app");

    let path = write_export(temp_dir.path(), &document).await.unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("chat-export-gemini-"));
    assert!(name.ends_with(".json"));

    let json = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(json.contains("\n  \"platform\": \"gemini\""));
    let conversation = parse_import(&json).unwrap();
    assert_eq!(conversation.len(), 2);
}
