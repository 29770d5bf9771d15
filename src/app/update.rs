// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler borrows the slices of `App` it needs through
//! [`UpdateContext`], keeping `App::update` itself a thin dispatcher. The
//! component effects declared by the wizard, guide, and preview are resolved
//! here: selection changes fan out into pivot refreshes, completions switch
//! screens, and export requests open the save dialog.

use super::config::{self, Config, DEFAULT_DEMO_LATENCY_MS, MAX_DEMO_LATENCY_MS};
use super::{persisted_state, Message, Screen};
use crate::assets::ApiBase;
use crate::catalog::Catalog;
use crate::export;
use crate::pivot::{PivotCache, PivotSource, PivotTable};
use crate::ui::{guide, navbar, notifications, preview, settings, wizard};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub catalog: &'a Arc<Catalog>,
    pub api_base: &'a ApiBase,
    pub config: &'a mut Config,
    pub wizard: &'a mut wizard::State,
    pub guide: &'a mut Option<guide::State>,
    pub preview: &'a mut preview::State,
    pub pivot_source: &'a Arc<dyn PivotSource>,
    pub pivot_cache: &'a mut PivotCache,
    pub notifications: &'a mut notifications::Manager,
    pub app_state: &'a mut persisted_state::AppState,
}

// =============================================================================
// Component message handlers
// =============================================================================

pub fn handle_wizard_message(ctx: &mut UpdateContext, message: wizard::Message) -> Task<Message> {
    match ctx.wizard.handle_message(message, ctx.catalog) {
        wizard::Effect::None => Task::none(),
        wizard::Effect::SelectionChanged => refresh_pivot(ctx),
        wizard::Effect::Completed => {
            *ctx.screen = Screen::Preview;
            refresh_pivot(ctx)
        }
        wizard::Effect::Close => {
            // The wizard is the home screen; closing it falls back to the
            // preview so Escape never leaves a dead end.
            *ctx.screen = Screen::Preview;
            Task::none()
        }
    }
}

pub fn handle_guide_message(ctx: &mut UpdateContext, message: guide::Message) -> Task<Message> {
    let Some(guide_state) = ctx.guide.as_mut() else {
        // A message raced the teardown of the guide screen; nothing to do.
        return Task::none();
    };

    match guide_state.handle_message(message, ctx.catalog) {
        guide::Effect::None => Task::none(),
        guide::Effect::Completed => {
            ctx.notifications.push(notifications::Notification::info(
                "Tour complete. Pick your countries to get started",
            ));
            *ctx.guide = None;
            *ctx.screen = Screen::Wizard;
            Task::none()
        }
        guide::Effect::Exit => {
            *ctx.guide = None;
            *ctx.screen = Screen::Wizard;
            Task::none()
        }
        guide::Effect::NavigateToBlock(block_id) => {
            ctx.preview.highlight_block(block_id);
            *ctx.guide = None;
            *ctx.screen = Screen::Preview;
            refresh_pivot(ctx)
        }
    }
}

pub fn handle_preview_message(ctx: &mut UpdateContext, message: preview::Message) -> Task<Message> {
    match ctx.preview.handle_message(message) {
        preview::Effect::None => Task::none(),
        preview::Effect::RequestRefresh => refresh_pivot(ctx),
        preview::Effect::RequestExport => open_export_dialog(ctx),
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::ThemeModeSelected(mode) => {
            ctx.config.general.theme_mode = mode;
            persist_config(ctx);
        }
        settings::Message::AutoAdvanceToggled(enabled) => {
            ctx.config.guide.auto_advance = Some(enabled);
            persist_config(ctx);
        }
        settings::Message::SlideDurationSelected(secs) => {
            ctx.config.guide.slide_duration_secs = Some(secs);
            persist_config(ctx);
        }
        settings::Message::BackToWizard => {
            *ctx.screen = Screen::Wizard;
        }
    }
    Task::none()
}

pub fn handle_navbar_message(ctx: &mut UpdateContext, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::SwitchTo(screen) => handle_screen_switch(ctx, screen),
    }
}

/// Applies a screen switch, constructing or tearing down the guide deck.
///
/// The guide state exists only while its screen is visible: leaving the
/// screen drops the deck (and with it the countdown), entering re-creates it
/// from config defaults.
pub fn handle_screen_switch(ctx: &mut UpdateContext, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }

    if *ctx.screen == Screen::Guide {
        *ctx.guide = None;
    }

    *ctx.screen = target;
    match target {
        Screen::Guide => {
            *ctx.guide = Some(guide::State::new(
                ctx.catalog,
                ctx.config.guide.auto_advance.unwrap_or(true),
                ctx.config
                    .guide
                    .slide_duration_secs
                    .unwrap_or(config::DEFAULT_SLIDE_DURATION_SECS),
            ));
            Task::none()
        }
        Screen::Preview => refresh_pivot(ctx),
        Screen::Wizard | Screen::Settings => Task::none(),
    }
}

// =============================================================================
// Pivot refresh
// =============================================================================

/// Cache key covering both selection sets.
pub fn selection_cache_key(wizard: &wizard::State) -> String {
    format!(
        "{}|{}",
        wizard.countries().cache_key(),
        wizard.categories().cache_key()
    )
}

/// Issues a pivot request for the current selection.
///
/// Cache hits resolve synchronously; misses dispatch the source on the
/// executor with the configured demo latency.
pub fn refresh_pivot(ctx: &mut UpdateContext) -> Task<Message> {
    let Some(request) = ctx
        .preview
        .begin_request(ctx.wizard.countries(), ctx.wizard.categories())
    else {
        return Task::none();
    };

    let cache_key = selection_cache_key(ctx.wizard);
    if let Some(table) = ctx.pivot_cache.get(&cache_key) {
        ctx.preview.apply_cached(table.clone());
        return Task::none();
    }

    let source = Arc::clone(ctx.pivot_source);
    let latency = Duration::from_millis(
        ctx.config
            .preview
            .demo_latency_ms
            .unwrap_or(DEFAULT_DEMO_LATENCY_MS)
            .min(MAX_DEMO_LATENCY_MS),
    );
    let generation = request.generation;

    Task::perform(
        async move {
            tokio::time::sleep(latency).await;
            source.compute(&request)
        },
        move |result| Message::PivotComputed {
            generation,
            cache_key: cache_key.clone(),
            result,
        },
    )
}

/// Applies a finished pivot computation, caching accepted tables.
pub fn handle_pivot_computed(
    ctx: &mut UpdateContext,
    generation: u64,
    cache_key: String,
    result: Result<PivotTable, String>,
) -> Task<Message> {
    let table = result.clone().ok();
    if ctx.preview.apply_result(generation, result) {
        if let Some(table) = table {
            ctx.pivot_cache.put(cache_key, table);
        }
    } else {
        log::debug!("discarding stale pivot response (generation {generation})");
    }
    Task::none()
}

// =============================================================================
// Export
// =============================================================================

/// Opens the save dialog for a CSV export.
fn open_export_dialog(ctx: &mut UpdateContext) -> Task<Message> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Export selection")
        .set_file_name(export::default_file_name());

    if let Some(dir) = ctx.app_state.last_export_directory.clone() {
        dialog = dialog.set_directory(dir);
    }

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ExportDialogResult,
    )
}

/// Writes the export once the user has picked a destination.
pub fn handle_export_dialog_result(
    ctx: &mut UpdateContext,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog.
        return Task::none();
    };

    let content = export::render_csv(
        ctx.catalog,
        ctx.api_base,
        ctx.wizard.countries(),
        ctx.wizard.categories(),
        ctx.preview.status().table(),
    );

    match export::write_csv(&path, &content) {
        Ok(()) => {
            ctx.notifications
                .push(notifications::Notification::success("Export written"));

            ctx.app_state.set_last_export_directory_from_file(&path);
            if let Some(warning) = ctx.app_state.save() {
                ctx.notifications
                    .push(notifications::Notification::warning(warning));
            }
        }
        Err(err) => {
            log::error!("export failed: {err}");
            ctx.notifications.push(notifications::Notification::error(
                "Export could not be written",
            ));
        }
    }
    Task::none()
}

// =============================================================================
// Config persistence
// =============================================================================

fn persist_config(ctx: &mut UpdateContext) {
    if let Err(err) = config::save(ctx.config) {
        log::warn!("saving settings failed: {err}");
        ctx.notifications.push(notifications::Notification::warning(
            "Settings could not be saved",
        ));
    }
}
