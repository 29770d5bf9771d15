// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse) to the component owning the
//! current screen, and provides the periodic tick that drives the guide
//! deck's auto-advance countdown and notification auto-dismiss.
//!
//! The tick subscription is derived from state on every frame: when the
//! guide stops needing ticks (auto-advance off, insight open, deck torn
//! down) and no toasts are pending, the subscription simply ceases to
//! exist. That structural teardown is what cancels the countdown; there is
//! no detached timer to chase.

use super::config::TICK_INTERVAL_MS;
use super::{Message, Screen};
use crate::ui::{guide, wizard};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// The wizard and the guide consume raw events (arrow keys, digits, swipe
/// gestures); the preview and settings screens are plain widget trees with
/// no raw-input needs.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Wizard => event::listen_with(|event, status, _window| match status {
            event::Status::Ignored => Some(Message::Wizard(wizard::Message::RawEvent(event))),
            event::Status::Captured => None,
        }),
        Screen::Guide => event::listen_with(|event, status, _window| match status {
            event::Status::Ignored => Some(Message::Guide(guide::Message::RawEvent(event))),
            event::Status::Captured => None,
        }),
        Screen::Preview | Screen::Settings => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for the auto-advance countdown and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    guide_ticking: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if guide_ticking || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
