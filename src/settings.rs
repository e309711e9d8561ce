//! Persisted user preferences: dark mode, piece style, board style.
//!
//! The store is a small key-value file in TOML. Reads are observable through a
//! [`watch`] channel; writes update the channel immediately and persist in the
//! background without the caller waiting.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument, warn};

/// Piece style used when none has been chosen.
pub const DEFAULT_PIECE_STYLE: &str = "default";

/// Board style used when none has been chosen.
pub const DEFAULT_BOARD_STYLE: &str = "wood";

/// User preferences as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark color scheme for the interface chrome.
    dark_mode: bool,
    /// Identifier of the piece (team flag) style.
    piece_style: String,
    /// Identifier of the board color style.
    board_style: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            piece_style: DEFAULT_PIECE_STYLE.to_string(),
            board_style: DEFAULT_BOARD_STYLE.to_string(),
        }
    }
}

/// Settings persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Shared handle to the settings.
///
/// Cloning is cheap; all clones observe and update the same values.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    sender: Arc<watch::Sender<Settings>>,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsStore {
    /// Opens the store backed by `path`, reading it if it exists.
    ///
    /// A missing file yields the defaults; it is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file exists but cannot be read or
    /// parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let settings = if path.exists() {
            debug!("Loading settings from file");
            let content = std::fs::read_to_string(&path).map_err(|e| {
                SettingsError::new(format!("Failed to read settings file: {}", e))
            })?;
            toml::from_str(&content)
                .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?
        } else {
            info!("Settings file not found, using defaults");
            Settings::default()
        };

        info!(
            dark_mode = settings.dark_mode,
            piece_style = %settings.piece_style,
            board_style = %settings.board_style,
            "Settings loaded"
        );
        Ok(Self::with_settings(Some(path), settings))
    }

    /// Store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::with_settings(None, Settings::default())
    }

    fn with_settings(path: Option<PathBuf>, settings: Settings) -> Self {
        let (sender, _) = watch::channel(settings);
        Self {
            path,
            sender: Arc::new(sender),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Latest settings.
    pub fn current(&self) -> Settings {
        self.sender.borrow().clone()
    }

    /// Stream of settings; the receiver is notified on every change.
    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.sender.subscribe()
    }

    /// Turns the dark color scheme on or off.
    #[instrument(skip(self))]
    pub fn set_dark_mode(&self, enabled: bool) {
        self.update(|s| {
            let changed = s.dark_mode != enabled;
            s.dark_mode = enabled;
            changed
        });
    }

    /// Chooses the piece style by identifier.
    #[instrument(skip(self, style_id))]
    pub fn set_piece_style(&self, style_id: impl Into<String>) {
        let style_id = style_id.into();
        self.update(|s| {
            let changed = s.piece_style != style_id;
            s.piece_style = style_id;
            changed
        });
    }

    /// Chooses the board style by identifier.
    #[instrument(skip(self, style_id))]
    pub fn set_board_style(&self, style_id: impl Into<String>) {
        let style_id = style_id.into();
        self.update(|s| {
            let changed = s.board_style != style_id;
            s.board_style = style_id;
            changed
        });
    }

    /// Writes the latest settings to disk and waits for completion.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if serialization or the write fails.
    #[instrument(skip(self))]
    pub async fn flush(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let _guard = self.write_lock.lock().await;
        let body = toml::to_string_pretty(&self.current())
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SettingsError::new(format!("Failed to create settings directory: {}", e))
            })?;
        }
        tokio::fs::write(path, body)
            .await
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))?;

        debug!(path = %path.display(), "Settings written");
        Ok(())
    }

    fn update(&self, modify: impl FnOnce(&mut Settings) -> bool) {
        if self.sender.send_if_modified(modify) {
            debug!(settings = ?self.current(), "Settings changed");
            self.persist_in_background();
        }
    }

    /// Fire-and-forget write. Each write takes the lock and saves whatever is
    /// latest, so the file ends up with the final value.
    fn persist_in_background(&self) {
        if self.path.is_none() {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = self.clone();
                handle.spawn(async move {
                    if let Err(e) = store.flush().await {
                        warn!(error = %e, "Background settings write failed");
                    }
                });
            }
            Err(_) => {
                if let Err(e) = self.flush_blocking() {
                    warn!(error = %e, "Settings write failed");
                }
            }
        }
    }

    fn flush_blocking(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let body = toml::to_string_pretty(&self.current())
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path, body)
            .map_err(|e| SettingsError::new(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_unset_values() {
        let settings = Settings::default();
        assert!(!*settings.dark_mode());
        assert_eq!(settings.piece_style(), "default");
        assert_eq!(settings.board_style(), "wood");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("dark_mode = true").unwrap();
        assert!(*settings.dark_mode());
        assert_eq!(settings.piece_style(), DEFAULT_PIECE_STYLE);
        assert_eq!(settings.board_style(), DEFAULT_BOARD_STYLE);
    }

    #[test]
    fn in_memory_updates_are_observable() {
        let store = SettingsStore::in_memory();
        let rx = store.subscribe();

        store.set_piece_style("italy");

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().piece_style(), "italy");
        assert_eq!(store.current().piece_style(), "italy");
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let store = SettingsStore::in_memory();
        let rx = store.subscribe();

        store.set_board_style(DEFAULT_BOARD_STYLE);

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn error_display_includes_location() {
        let err = SettingsError::new("boom");
        let text = err.to_string();
        assert!(text.starts_with("Settings error: boom at "));
        assert!(text.contains("settings.rs"));
    }
}
