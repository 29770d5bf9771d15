// SPDX-License-Identifier: MPL-2.0
//! Data-layer list for the wizard's second phase.

use super::Message;
use crate::catalog::Catalog;
use crate::selection::SelectionSet;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(catalog: &'a Catalog, selected: &'a SelectionSet) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS);

    for category in catalog.categories() {
        list = list.push(category_row(
            &category.id,
            &category.name,
            &category.summary,
            category.metric_count,
            selected.contains(&category.id),
        ));
    }

    let select_all = button(Text::new("Select all layers").size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_selection(false))
        .on_press(Message::SelectAllCategories);

    Column::new()
        .push(select_all)
        .push(scrollable(list).height(Length::Fill))
        .spacing(spacing::MD)
        .into()
}

fn category_row<'a>(
    id: &str,
    name: &str,
    summary: &str,
    metric_count: u32,
    is_selected: bool,
) -> Element<'a, Message> {
    let label = Column::new()
        .push(Text::new(name.to_string()).size(typography::BODY_LG))
        .push(
            Text::new(summary.to_string())
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.color),
                }),
        )
        .spacing(spacing::XXS);

    let badge = Text::new(format!("{metric_count} metrics")).size(typography::CAPTION);

    let content = Row::new()
        .push(Container::new(label).width(Length::Fill))
        .push(badge)
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::MD);

    button(
        Container::new(content)
            .padding(spacing::SM)
            .height(Length::Fixed(sizing::CATEGORY_ROW_HEIGHT))
            .width(Length::Fill),
    )
    .style(styles::button_selection(is_selected))
    .on_press(Message::ToggleCategory(id.to_string()))
    .into()
}
