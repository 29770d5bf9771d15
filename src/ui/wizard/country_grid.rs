// SPDX-License-Identifier: MPL-2.0
//! Country grid with the region quick-select row.

use super::Message;
use crate::catalog::Catalog;
use crate::selection::SelectionSet;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Countries per grid row.
const GRID_COLUMNS: usize = 4;

pub fn view<'a>(catalog: &'a Catalog, selected: &'a SelectionSet) -> Element<'a, Message> {
    let regions = region_row(catalog, selected);
    let grid = country_rows(catalog, selected);

    Column::new()
        .push(regions)
        .push(scrollable(grid).height(Length::Fill))
        .spacing(spacing::MD)
        .into()
}

fn region_row<'a>(catalog: &'a Catalog, selected: &'a SelectionSet) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for region in catalog.regions() {
        let members = region.country_ids.iter().map(String::as_str);
        let fully_selected = !region.country_ids.is_empty() && selected.contains_all(members);

        let chip = button(
            Text::new(format!("{} {}", region.glyph, region.label)).size(typography::BODY_SM),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_selection(fully_selected))
        .on_press(Message::ToggleRegion(region.id.clone()));

        row = row.push(chip);
    }

    row.into()
}

fn country_rows<'a>(catalog: &'a Catalog, selected: &'a SelectionSet) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    for chunk in catalog.countries().chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for country in chunk {
            row = row.push(country_card(
                &country.iso_code,
                &country.flag,
                &country.name,
                selected.contains(&country.iso_code),
            ));
        }
        column = column.push(row);
    }

    column.into()
}

fn country_card<'a>(
    iso_code: &str,
    flag: &str,
    name: &str,
    is_selected: bool,
) -> Element<'a, Message> {
    let content = Column::new()
        .push(Text::new(flag.to_string()).size(typography::TITLE_MD))
        .push(Text::new(name.to_string()).size(typography::BODY_SM))
        .push(Text::new(iso_code.to_string()).size(typography::CAPTION))
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center);

    button(
        Container::new(content)
            .width(Length::Fixed(sizing::COUNTRY_CARD_WIDTH))
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center),
    )
    .style(styles::button_selection(is_selected))
    .on_press(Message::ToggleCountry(iso_code.to_string()))
    .into()
}
