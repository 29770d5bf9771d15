// SPDX-License-Identifier: MPL-2.0
//! Deck footer: navigation arrows, progress dots, slide counter HUD, and
//! the auto-advance toggle with its countdown indicator.

use super::Message;
use crate::catalog::{Catalog, SlideDuration};
use crate::flow::DeckMachine;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

pub fn view<'a>(
    catalog: &'a Catalog,
    deck: &'a DeckMachine,
    current_duration: SlideDuration,
) -> Element<'a, Message> {
    let previous = button(Text::new("←").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Previous);

    let next = button(Text::new("→").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Next);

    let counter = Container::new(
        Text::new(format!("{} / {}", deck.cursor() + 1, deck.slide_count()))
            .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(crate::ui::styles::overlay::indicator(radius::FULL));

    let auto_label = if deck.auto_advance().is_enabled() {
        let progress = deck
            .auto_advance()
            .progress(Instant::now(), current_duration);
        format!("⏸ Auto ({:>3.0}%)", progress * 100.0)
    } else {
        "▶ Auto".to_string()
    };
    let auto_toggle = button(Text::new(auto_label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_selection(deck.auto_advance().is_enabled()))
        .on_press(Message::ToggleAutoAdvance);

    let exit = button(Text::new("✕").size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::text_link(false))
        .on_press(Message::Exit);

    Row::new()
        .push(previous)
        .push(dots(catalog, deck))
        .push(next)
        .push(counter)
        .push(Container::new(auto_toggle).width(Length::Fill))
        .push(exit)
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// One clickable dot per slide; the current one is drawn filled.
fn dots<'a>(catalog: &'a Catalog, deck: &'a DeckMachine) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);

    for (index, _slide) in catalog.deck().iter().enumerate() {
        let glyph = if index == deck.cursor() { "●" } else { "○" };
        row = row.push(
            button(Text::new(glyph).size(sizing::PROGRESS_DOT))
                .padding(spacing::XXS)
                .style(styles::button::text_link(index == deck.cursor()))
                .on_press(Message::GoTo(index)),
        );
    }

    row.into()
}
