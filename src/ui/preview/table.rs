// SPDX-License-Identifier: MPL-2.0
//! Pivot table rendering: countries as rows, data layers as columns.

use super::Message;
use crate::catalog::Catalog;
use crate::pivot::PivotTable;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Width of the leading country-name column.
const LABEL_COLUMN_WIDTH: f32 = 180.0;

/// Width of one data cell.
const CELL_WIDTH: f32 = 110.0;

pub fn view<'a>(
    catalog: &'a Catalog,
    pivot: &'a PivotTable,
    highlighted_block: Option<&'a str>,
) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XXS);

    // Header row
    let mut header = Row::new().spacing(spacing::XXS);
    header = header.push(cell(
        Text::new("Country").size(typography::BODY_SM).into(),
        LABEL_COLUMN_WIDTH,
        false,
    ));
    for column in &pivot.columns {
        let highlighted = highlighted_block == Some(column.as_str());
        header = header.push(cell(
            Text::new(catalog.category_label(column).to_string())
                .size(typography::BODY_SM)
                .into(),
            CELL_WIDTH,
            highlighted,
        ));
    }
    grid = grid.push(header);

    // Data rows
    for row in &pivot.rows {
        let mut rendered = Row::new().spacing(spacing::XXS);
        rendered = rendered.push(cell(
            Text::new(catalog.country_label(&row.country_id).to_string())
                .size(typography::BODY)
                .into(),
            LABEL_COLUMN_WIDTH,
            false,
        ));

        for (column, value) in pivot.columns.iter().zip(&row.cells) {
            let highlighted = highlighted_block == Some(column.as_str());
            let content = Column::new()
                .push(Text::new(format!("{}/{}", value.populated, value.tracked)).size(typography::BODY))
                .push(
                    Text::new(format!("{}%", value.coverage_pct()))
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.strong.color),
                        }),
                )
                .spacing(0.0)
                .align_x(alignment::Horizontal::Center);
            rendered = rendered.push(cell(content.into(), CELL_WIDTH, highlighted));
        }

        grid = grid.push(rendered);
    }

    // Totals footer
    let totals = Text::new(format!("{} populated metrics in scope", pivot.total_populated()))
        .size(typography::CAPTION);
    grid = grid.push(Container::new(totals).padding(spacing::XS));

    scrollable(grid).height(Length::Fill).into()
}

fn cell(content: Element<'_, Message>, width: f32, highlighted: bool) -> Element<'_, Message> {
    let container = Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    if highlighted {
        container
            .style(styles::container::highlighted_block)
            .into()
    } else {
        container.into()
    }
}
