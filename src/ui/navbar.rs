// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! A slim top bar with the product name and direct links to the wizard,
//! the framework guide, the pivot preview, and settings.

use crate::app::Screen;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub screen: Screen,
    /// Countries × layers summary shown next to the brand.
    pub selection_summary: String,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchTo(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SwitchTo(screen) => Event::SwitchTo(screen),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext) -> Element<'static, Message> {
    let brand = Text::new("VitalAtlas").size(typography::TITLE_MD);
    let summary = Text::new(ctx.selection_summary).size(typography::CAPTION);

    let mut links = Row::new().spacing(spacing::XS);
    for (label, screen) in [
        ("Wizard", Screen::Wizard),
        ("Guide", Screen::Guide),
        ("Preview", Screen::Preview),
        ("Settings", Screen::Settings),
    ] {
        links = links.push(
            button(Text::new(label).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::text_link(ctx.screen == screen))
                .on_press(Message::SwitchTo(screen)),
        );
    }

    let bar = Row::new()
        .push(brand)
        .push(Container::new(summary).width(Length::Fill).padding([0.0, spacing::MD]))
        .push(links)
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::MD);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(|theme: &Theme| container::Style {
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
