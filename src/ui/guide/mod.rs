// SPDX-License-Identifier: MPL-2.0
//! The framework guide: a slide deck with auto-advance, insight overlays,
//! and keyboard/swipe navigation.
//!
//! The component composes three state machines: the [`DeckMachine`] cursor,
//! the [`InsightPanel`] overlay, and a [`SwipeState`] gesture tracker. The
//! one cross-machine contract lives in [`State::handle_message`]: opening an
//! insight while the countdown runs disables auto-advance, because reading
//! detail content implicitly pauses the tour.

mod insight_overlay;
mod progress;
mod slide;

use crate::catalog::{Catalog, SlideDuration};
use crate::flow::{DeckMachine, InsightPanel, Step};
use crate::ui::state::swipe::{SwipeDirection, SwipeState};
use iced::widget::{Column, Container, Stack};
use iced::{event, keyboard, mouse, Element, Length, Point};
use std::time::Instant;

/// Guide deck component state.
#[derive(Debug, Clone)]
pub struct State {
    deck: DeckMachine,
    insight: InsightPanel,
    swipe: SwipeState,
    cursor_position: Option<Point>,
    fallback_slide_secs: u32,
}

/// Messages handled by the guide deck.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance one slide (arrow button, ArrowRight, swipe left).
    Next,
    /// Retreat one slide (arrow button, ArrowLeft, swipe right).
    Previous,
    /// Jump to a slide (progress dot, digit key).
    GoTo(usize),
    /// Toggle the auto-advance countdown (toolbar button, Space).
    ToggleAutoAdvance,
    /// Open an insight overlay by ID (slide chip).
    OpenInsight(String),
    /// Close the insight overlay.
    CloseInsight,
    /// Jump from the open insight to its pivot block in the preview.
    OpenInsightBlock(String),
    /// Close button on the deck itself.
    Exit,
    /// Periodic tick driving the auto-advance countdown.
    Tick(Instant),
    /// Raw window event routed from the app subscription.
    RawEvent(event::Event),
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The tour advanced past the last slide.
    Completed,
    /// The user closed the deck (Escape with no overlay open, close button).
    Exit,
    /// An insight deep-link: switch to the preview and highlight the block.
    NavigateToBlock(String),
}

impl State {
    /// Creates a deck over the catalog's slides.
    ///
    /// With `auto_advance` set, the countdown starts immediately on the
    /// first slide.
    #[must_use]
    pub fn new(catalog: &Catalog, auto_advance: bool, fallback_slide_secs: u32) -> Self {
        let mut deck = DeckMachine::new(catalog.deck().len());
        if auto_advance {
            deck.enable_auto_advance(Instant::now());
        }
        Self {
            deck,
            insight: InsightPanel::new(),
            swipe: SwipeState::default(),
            cursor_position: None,
            fallback_slide_secs,
        }
    }

    /// Current slide index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    /// Whether the countdown is currently enabled.
    #[must_use]
    pub fn auto_advance_enabled(&self) -> bool {
        self.deck.auto_advance().is_enabled()
    }

    /// Whether an insight overlay is open.
    #[must_use]
    pub fn insight_open(&self) -> bool {
        self.insight.is_open()
    }

    /// Whether the app subscription should deliver periodic ticks.
    ///
    /// The countdown is suppressed while an insight is open; dropping the
    /// subscription is the synchronous cancellation.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.deck.auto_advance().is_enabled() && !self.insight.is_open()
    }

    /// Resolved duration of the slide the cursor is on.
    #[must_use]
    pub fn current_slide_duration(&self, catalog: &Catalog) -> SlideDuration {
        catalog
            .deck()
            .get(self.deck.cursor())
            .map_or_else(SlideDuration::default, |slide| {
                slide.duration(self.fallback_slide_secs)
            })
    }

    /// Processes a message and returns the effect for the parent.
    pub fn handle_message(&mut self, message: Message, catalog: &Catalog) -> Effect {
        match message {
            Message::Next => {
                let step = self.deck.next(Instant::now());
                step_to_effect(step)
            }
            Message::Previous => {
                self.deck.previous(Instant::now());
                Effect::None
            }
            Message::GoTo(index) => {
                self.deck.go_to(index, Instant::now());
                Effect::None
            }
            Message::ToggleAutoAdvance => {
                self.deck.toggle_auto_advance(Instant::now());
                Effect::None
            }
            Message::OpenInsight(id) => {
                if self.insight.open(&id, catalog) {
                    // Reading detail content implicitly pauses the tour.
                    self.deck.disable_auto_advance();
                }
                Effect::None
            }
            Message::CloseInsight => {
                self.insight.close();
                Effect::None
            }
            Message::OpenInsightBlock(block_id) => {
                self.insight.close();
                Effect::NavigateToBlock(block_id)
            }
            Message::Exit => Effect::Exit,
            Message::Tick(now) => {
                if self.insight.is_open() {
                    return Effect::None;
                }
                let duration = self.current_slide_duration(catalog);
                let step = self.deck.fire_if_due(now, duration);
                step_to_effect(step)
            }
            Message::RawEvent(raw) => self.handle_raw_event(raw, catalog),
        }
    }

    fn handle_raw_event(&mut self, raw: event::Event, catalog: &Catalog) -> Effect {
        match raw {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::ArrowRight => self.handle_message(Message::Next, catalog),
                keyboard::key::Named::ArrowLeft => {
                    self.handle_message(Message::Previous, catalog)
                }
                keyboard::key::Named::Space => {
                    self.handle_message(Message::ToggleAutoAdvance, catalog)
                }
                keyboard::key::Named::Escape => {
                    if self.insight.is_open() {
                        self.insight.close();
                        Effect::None
                    } else {
                        Effect::Exit
                    }
                }
                _ => Effect::None,
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if !modifiers.command() && !modifiers.alt() => {
                // Digit keys 1-9 jump straight to a slide; out-of-range
                // digits for a shorter deck are ignored by the machine.
                match c.as_str().parse::<usize>() {
                    Ok(digit @ 1..=9) => self.handle_message(Message::GoTo(digit - 1), catalog),
                    _ => Effect::None,
                }
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, catalog),
            _ => Effect::None,
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: mouse::Event, catalog: &Catalog) -> Effect {
        match mouse_event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                self.swipe.update(position);
                Effect::None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if let Some(position) = self.cursor_position {
                    self.swipe.start(position);
                }
                Effect::None
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => match self.swipe.finish() {
                Some(SwipeDirection::Forward) => self.handle_message(Message::Next, catalog),
                Some(SwipeDirection::Backward) => self.handle_message(Message::Previous, catalog),
                None => Effect::None,
            },
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                self.swipe.cancel();
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Renders the deck with the insight overlay stacked on top when open.
    pub fn view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        let current = catalog.deck().get(self.deck.cursor());

        let deck_view: Element<'a, Message> = Column::new()
            .push(slide::view(current))
            .push(progress::view(
                catalog,
                &self.deck,
                self.current_slide_duration(catalog),
            ))
            .spacing(crate::ui::design_tokens::spacing::LG)
            .padding(crate::ui::design_tokens::spacing::LG)
            .into();

        let base = Container::new(deck_view)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(insight) = self.insight.active() {
            let accent = current.map_or((0.5, 0.5, 0.5), |s| s.accent_rgb());
            Stack::new()
                .push(base)
                .push(insight_overlay::view(insight, accent))
                .into()
        } else {
            base.into()
        }
    }
}

fn step_to_effect(step: Step) -> Effect {
    match step {
        Step::Completed => Effect::Completed,
        Step::Moved(_) | Step::Ignored => Effect::None,
    }
}
