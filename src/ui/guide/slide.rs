// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single guide slide.

use super::Message;
use crate::catalog::{SlideDef, SlideKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AccentRings;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Diameter of the decorative ring motif on title/conclusion slides.
const RING_MOTIF_SIZE: f32 = 96.0;

pub fn view(slide: Option<&SlideDef>) -> Element<'_, Message> {
    let Some(slide) = slide else {
        // Unreachable with a validated catalog; render an empty frame
        // instead of panicking.
        return Container::new(text("")).into();
    };

    let (r, g, b) = slide.accent_rgb();
    let accent = Color::from_rgb(r, g, b);

    let title_size = match slide.kind {
        SlideKind::Title | SlideKind::Conclusion => typography::TITLE_LG,
        SlideKind::Concept | SlideKind::Metric => typography::TITLE_MD,
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::SLIDE_MAX_WIDTH);

    if matches!(slide.kind, SlideKind::Title | SlideKind::Conclusion) {
        content = content.push(
            Container::new(AccentRings::new(accent, RING_MOTIF_SIZE).into_element())
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    content = content.push(
        Text::new(slide.title.clone())
            .size(title_size)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            }),
    );

    for paragraph in &slide.body {
        content = content.push(Text::new(paragraph.clone()).size(typography::BODY_LG));
    }

    if !slide.insight_ids.is_empty() {
        content = content.push(insight_chips(slide));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn insight_chips(slide: &SlideDef) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for insight_id in &slide.insight_ids {
        row = row.push(
            button(Text::new(format!("💡 {insight_id}")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_selection(false))
                .on_press(Message::OpenInsight(insight_id.clone())),
        );
    }

    row.into()
}
