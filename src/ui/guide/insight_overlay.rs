// SPDX-License-Identifier: MPL-2.0
//! The insight detail overlay, stacked above the deck while open.

use super::Message;
use crate::catalog::Insight;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub fn view(insight: &Insight, accent: (f32, f32, f32)) -> Element<'_, Message> {
    let accent = Color::from_rgb(accent.0, accent.1, accent.2);

    let close = button(Text::new("✕").size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::button::text_link(false))
        .on_press(Message::CloseInsight);

    let header = Row::new()
        .push(
            Container::new(Text::new(insight.label.clone()).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(close)
        .align_y(alignment::Vertical::Center);

    let mut card = Column::new()
        .push(header)
        .push(Text::new(insight.data_point.clone()).size(typography::TITLE_MD))
        .push(
            Text::new(insight.source.clone())
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(crate::ui::design_tokens::palette::GRAY_200),
                }),
        )
        .spacing(spacing::SM);

    if let Some(block_id) = &insight.block_id {
        card = card.push(
            button(Text::new("Open in preview →").size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_primary)
                .on_press(Message::OpenInsightBlock(block_id.clone())),
        );
    }

    let card = Container::new(card)
        .width(Length::Fixed(sizing::INSIGHT_OVERLAY_WIDTH))
        .padding(spacing::LG)
        .style(styles::overlay::insight_card(accent, radius::LG));

    // Clicking the dimmed backdrop closes the overlay.
    mouse_area(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseInsight)
    .into()
}
