// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Transient state that should survive sessions but is not user-configurable
//! (unlike preferences in `settings.toml`). Stored in CBOR for compact
//! binary storage and a clear separation from the user-editable TOML file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. Set `VITAL_ATLAS_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory an export was written to; used as the initial
    /// directory of the next save dialog.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns `(state, optional_warning)`. A missing file is not a warning;
    /// an unreadable or unparsable one falls back to defaults with a message
    /// suitable for a notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Saved session state could not be parsed".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Saved session state could not be read".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if needed. Returns an optional warning
    /// message if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let path = Self::state_file_path_with_override(base_dir)?;

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Session state directory could not be created".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    Some("Session state could not be written".to_string())
                } else {
                    None
                }
            }
            Err(_) => Some("Session state could not be written".to_string()),
        }
    }

    /// Remembers the directory containing an exported file.
    pub fn set_last_export_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_export_directory = Some(parent.to_path_buf());
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}
