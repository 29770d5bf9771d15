// SPDX-License-Identifier: MPL-2.0
//! Phase breadcrumb header and the wizard footer controls.

use super::{Message, State};
use crate::catalog::Catalog;
use crate::flow::WizardPhase;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Breadcrumb header: one clickable entry per phase, with the selection
/// count badged onto the countries entry.
pub fn phase_header(state: &State) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    for phase in WizardPhase::ALL {
        let active = phase == state.phase();
        let label = match phase {
            WizardPhase::Countries => {
                format!("1. {} ({})", phase.label(), state.countries().len())
            }
            WizardPhase::DataLayers => {
                format!("2. {} ({})", phase.label(), state.categories().len())
            }
        };

        row = row.push(
            button(Text::new(label).size(typography::TITLE_SM))
                .style(styles::button::text_link(active))
                .on_press(Message::PhaseClicked(phase)),
        );
    }

    row.into()
}

/// Footer: Back / Clear / Continue, plus the derived metric total on the
/// data-layer phase.
pub fn footer<'a>(state: &'a State, catalog: &'a Catalog) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    if state.phase() != WizardPhase::Countries {
        row = row.push(
            button(Text::new("Back").size(typography::BODY))
                .style(styles::button::text_link(false))
                .on_press(Message::Back),
        );
    }

    row = row.push(
        button(Text::new("Clear").size(typography::BODY))
            .style(styles::button::text_link(false))
            .on_press(Message::ClearPhase),
    );

    let summary: Element<'a, Message> = match state.phase() {
        WizardPhase::Countries => Text::new(format!(
            "{} of {} countries selected",
            state.countries().len(),
            catalog.countries().len()
        ))
        .size(typography::BODY_SM)
        .into(),
        WizardPhase::DataLayers => Text::new(format!(
            "{} layers · {} metrics",
            state.categories().len(),
            state.categories().metric_total(catalog)
        ))
        .size(typography::BODY_SM)
        .into(),
    };

    let continue_label = if state.phase() == WizardPhase::DataLayers {
        "Open preview"
    } else {
        "Continue"
    };
    let mut continue_button =
        button(Text::new(continue_label).size(typography::BODY)).style(styles::button_primary);
    if state.can_continue() {
        continue_button = continue_button.on_press(Message::Continue);
    }

    row = row
        .push(Container::new(summary).width(Length::Fill))
        .push(continue_button);

    Column::new().push(row).into()
}
