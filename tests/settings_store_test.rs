//! Tests for the file-backed settings store.

use std::fs;
use tempfile::TempDir;

use dama::{DEFAULT_BOARD_STYLE, DEFAULT_PIECE_STYLE, SettingsStore};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dama_settings.toml");

    let store = SettingsStore::load(&path).expect("Load failed");
    let settings = store.current();

    assert!(!*settings.dark_mode());
    assert_eq!(settings.piece_style(), DEFAULT_PIECE_STYLE);
    assert_eq!(settings.board_style(), DEFAULT_BOARD_STYLE);
    assert!(!path.exists(), "loading alone must not create the file");
}

#[tokio::test]
async fn test_changes_survive_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("dama_settings.toml");

    let store = SettingsStore::load(&path).expect("Load failed");
    store.set_dark_mode(true);
    store.set_piece_style("france");
    store.set_board_style("ocean");
    store.flush().await.expect("Flush failed");

    let reloaded = SettingsStore::load(&path).expect("Reload failed").current();
    assert!(*reloaded.dark_mode());
    assert_eq!(reloaded.piece_style(), "france");
    assert_eq!(reloaded.board_style(), "ocean");
}

#[tokio::test]
async fn test_last_write_wins() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dama_settings.toml");

    let store = SettingsStore::load(&path).expect("Load failed");
    for style in ["italy", "spain", "germany"] {
        store.set_piece_style(style);
    }
    store.flush().await.expect("Flush failed");

    let reloaded = SettingsStore::load(&path).expect("Reload failed").current();
    assert_eq!(reloaded.piece_style(), "germany");
}

#[test]
fn test_writes_without_runtime_are_synchronous() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dama_settings.toml");

    let store = SettingsStore::load(&path).expect("Load failed");
    store.set_dark_mode(true);

    let content = fs::read_to_string(&path).expect("File not written");
    assert!(content.contains("dark_mode = true"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dama_settings.toml");
    fs::write(&path, "board_style = \"marble\"\n").expect("Write failed");

    let settings = SettingsStore::load(&path).expect("Load failed").current();
    assert_eq!(settings.board_style(), "marble");
    assert_eq!(settings.piece_style(), DEFAULT_PIECE_STYLE);
    assert!(!*settings.dark_mode());
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("dama_settings.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = SettingsStore::load(&path).expect_err("Should reject invalid TOML");
    assert!(err.to_string().contains("Failed to parse settings"));
}

#[tokio::test]
async fn test_subscribers_see_every_clone() {
    let store = SettingsStore::in_memory();
    let other = store.clone();
    let mut rx = store.subscribe();

    other.set_dark_mode(true);

    rx.changed().await.expect("Sender dropped");
    assert!(*rx.borrow_and_update().dark_mode());
    assert!(store.path().is_none());
}
