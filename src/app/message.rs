// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::pivot::PivotTable;
use crate::ui::{guide, navbar, notifications, preview, settings, wizard};
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Wizard(wizard::Message),
    Guide(guide::Message),
    Preview(preview::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Periodic tick: drives the guide countdown and toast auto-dismiss.
    Tick(Instant),
    /// A pivot computation finished (possibly for a superseded selection).
    PivotComputed {
        generation: u64,
        cache_key: String,
        result: Result<PivotTable, String>,
    },
    /// Result from the export save dialog; `None` when the user cancelled.
    ExportDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional screen to open on startup (`--screen guide`).
    pub screen: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over the `VITAL_ATLAS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `VITAL_ATLAS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
