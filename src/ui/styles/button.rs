// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (Continue, Export).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Selectable card/row style for country cards and category rows.
///
/// Selected entries get the brand fill; unselected ones stay on the theme
/// surface with a subtle border so the grid reads as clickable.
pub fn selection(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let surface = theme.extended_palette().background.base.color;
        let text = theme.extended_palette().background.base.text;

        if selected {
            let background = match status {
                button::Status::Hovered => palette::PRIMARY_400,
                _ => palette::PRIMARY_500,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: WHITE,
                border: Border {
                    color: palette::PRIMARY_600,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        } else {
            let background = match status {
                button::Status::Hovered => Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                },
                _ => surface,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: text,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Overlay buttons (deck navigation arrows, insight close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Bare text button (phase breadcrumb, navbar links).
pub fn text_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        let color = if active {
            palette::PRIMARY_400
        } else {
            match status {
                button::Status::Hovered => palette::PRIMARY_400,
                _ => base,
            }
        };
        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
