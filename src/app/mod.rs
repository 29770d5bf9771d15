// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the wizard, the framework guide, the
//! pivot preview, and settings, and translates component effects into side
//! effects like config persistence, pivot computation, or CSV export. This
//! file intentionally keeps policy decisions (which screen a completed tour
//! lands on, when the guide deck is torn down, window sizing) close to the
//! main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::assets::ApiBase;
use crate::catalog::Catalog;
use crate::pivot::{DemoPivotSource, PivotCache, PivotSource};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::{guide, preview, wizard};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the screens, reference data, and
/// persisted preferences.
pub struct App {
    screen: Screen,
    catalog: Arc<Catalog>,
    config: config::Config,
    api_base: ApiBase,
    wizard: wizard::State,
    /// Present only while the Guide screen is visible; dropping it is the
    /// teardown that cancels the auto-advance countdown.
    guide: Option<guide::State>,
    preview: preview::State,
    pivot_source: Arc<dyn PivotSource>,
    pivot_cache: PivotCache,
    /// Persisted application state (last export directory, etc.).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("countries", &self.wizard.countries().len())
            .field("categories", &self.wizard.categories().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog =
            Arc::new(Catalog::load().expect("embedded reference data failed to parse"));
        let config = config::Config::default();

        Self {
            screen: Screen::Wizard,
            api_base: ApiBase::resolve(config.preview.api_base_url.as_deref()),
            wizard: wizard::State::new(),
            guide: None,
            preview: preview::State::new(),
            pivot_source: Arc::new(DemoPivotSource::new(Arc::clone(&catalog))),
            pivot_cache: PivotCache::new(
                config
                    .preview
                    .cache_entries
                    .unwrap_or(config::DEFAULT_PIVOT_CACHE_ENTRIES),
            ),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            catalog,
            config,
        }
    }
}

impl App {
    /// Initializes application state from persisted config and optionally
    /// deep-links to a start screen from the CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App::default();
        app.api_base = ApiBase::resolve(config.preview.api_base_url.as_deref());
        app.pivot_cache = PivotCache::new(
            config
                .preview
                .cache_entries
                .unwrap_or(config::DEFAULT_PIVOT_CACHE_ENTRIES),
        );
        app.config = config;
        app.app_state = app_state;

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }
        if let Some(warning) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        let task = match flags.screen.as_deref().and_then(Screen::from_flag) {
            Some(target) if target != app.screen => {
                app.update(Message::SwitchScreen(target))
            }
            _ => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - VitalAtlas", self.screen.title())
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if ThemeMode::System.is_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let guide_ticking = self
            .guide
            .as_ref()
            .map(guide::State::needs_tick)
            .unwrap_or(false);
        let tick_sub = subscription::create_tick_subscription(
            self.screen == Screen::Guide && guide_ticking,
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            catalog: &self.catalog,
            api_base: &self.api_base,
            config: &mut self.config,
            wizard: &mut self.wizard,
            guide: &mut self.guide,
            preview: &mut self.preview,
            pivot_source: &self.pivot_source,
            pivot_cache: &mut self.pivot_cache,
            notifications: &mut self.notifications,
            app_state: &mut self.app_state,
        };

        match message {
            Message::Wizard(wizard_message) => {
                update::handle_wizard_message(&mut ctx, wizard_message)
            }
            Message::Guide(guide_message) => update::handle_guide_message(&mut ctx, guide_message),
            Message::Preview(preview_message) => {
                update::handle_preview_message(&mut ctx, preview_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick();
                if self.screen == Screen::Guide {
                    let mut ctx = update::UpdateContext {
                        screen: &mut self.screen,
                        catalog: &self.catalog,
                        api_base: &self.api_base,
                        config: &mut self.config,
                        wizard: &mut self.wizard,
                        guide: &mut self.guide,
                        preview: &mut self.preview,
                        pivot_source: &self.pivot_source,
                        pivot_cache: &mut self.pivot_cache,
                        notifications: &mut self.notifications,
                        app_state: &mut self.app_state,
                    };
                    update::handle_guide_message(&mut ctx, guide::Message::Tick(now))
                } else {
                    Task::none()
                }
            }
            Message::PivotComputed {
                generation,
                cache_key,
                result,
            } => update::handle_pivot_computed(&mut ctx, generation, cache_key, result),
            Message::ExportDialogResult(path) => {
                update::handle_export_dialog_result(&mut ctx, path)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            catalog: &self.catalog,
            config: &self.config,
            wizard: &self.wizard,
            guide: self.guide.as_ref(),
            preview: &self.preview,
            notifications: &self.notifications,
        })
    }
}
