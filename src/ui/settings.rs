// SPDX-License-Identifier: MPL-2.0
//! Settings screen: theme mode, guide deck defaults, and preview options.
//!
//! The screen is stateless; it renders the live `Config` values and emits
//! messages the app applies and persists.

use crate::app::config::{Config, DEFAULT_SLIDE_DURATION_SECS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Slide-duration presets offered in the picker (seconds).
const SLIDE_DURATION_PRESETS: [u32; 4] = [4, 8, 12, 20];

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeModeSelected(ThemeMode),
    AutoAdvanceToggled(bool),
    SlideDurationSelected(u32),
    BackToWizard,
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub config: &'a Config,
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Settings").size(typography::TITLE_LG);

    let back = button(Text::new("← Back").size(typography::BODY))
        .style(styles::button::text_link(false))
        .on_press(Message::BackToWizard);

    let theme_section = section(
        "Theme",
        theme_row(ctx.config.general.theme_mode),
    );

    let auto_advance_on = ctx.config.guide.auto_advance.unwrap_or(true);
    let guide_section = section(
        "Framework guide",
        Column::new()
            .push(auto_advance_row(auto_advance_on))
            .push(duration_row(
                ctx.config
                    .guide
                    .slide_duration_secs
                    .unwrap_or(DEFAULT_SLIDE_DURATION_SECS),
            ))
            .spacing(spacing::SM)
            .into(),
    );

    let content = Column::new()
        .push(back)
        .push(title)
        .push(theme_section)
        .push(guide_section)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(640.0);

    Container::new(content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn section<'a>(label: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .push(Text::new(label).size(typography::TITLE_SM))
        .push(body)
        .spacing(spacing::SM)
        .into()
}

fn theme_row<'a>(current: ThemeMode) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
        row = row.push(
            button(Text::new(mode.label()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_selection(mode == current))
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    row.into()
}

fn auto_advance_row<'a>(enabled: bool) -> Element<'a, Message> {
    let label = Text::new("Start tours with auto-advance").size(typography::BODY);

    let toggle = button(
        Text::new(if enabled { "On" } else { "Off" }).size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button_selection(enabled))
    .on_press(Message::AutoAdvanceToggled(!enabled));

    Row::new()
        .push(Container::new(label).width(Length::Fill))
        .push(toggle)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn duration_row<'a>(current: u32) -> Element<'a, Message> {
    let label = Text::new("Fallback slide duration").size(typography::BODY);

    let mut presets = Row::new().spacing(spacing::XS);
    for secs in SLIDE_DURATION_PRESETS {
        presets = presets.push(
            button(Text::new(format!("{secs}s")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button_selection(secs == current))
                .on_press(Message::SlideDurationSelected(secs)),
        );
    }

    let hint = Text::new("Used for slides that do not declare their own timing")
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    Column::new()
        .push(
            Row::new()
                .push(Container::new(label).width(Length::Fill))
                .push(presets)
                .align_y(alignment::Vertical::Center),
        )
        .push(hint)
        .spacing(spacing::XXS)
        .into()
}
