// SPDX-License-Identifier: MPL-2.0
//! The pivot preview panel.
//!
//! Holds the pivot lifecycle state ([`PivotStatus`]) and a request
//! generation counter. The app owns the [`PivotSource`] and the cache and
//! drives this component: `begin_request` stamps a new generation, and
//! `apply_result` discards any response whose stamp is stale, so a selection
//! change mid-flight can therefore never overwrite fresher data.
//!
//! [`PivotSource`]: crate::pivot::PivotSource

mod table;

use crate::catalog::Catalog;
use crate::pivot::{PivotRequest, PivotStatus, PivotTable};
use crate::selection::SelectionSet;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Preview panel state.
#[derive(Debug, Clone, Default)]
pub struct State {
    status: PivotStatus,
    generation: u64,
    highlighted_block: Option<String>,
}

/// Messages handled by the preview panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Export the current selection and table as CSV.
    Export,
    /// Re-request the pivot after a failure.
    Retry,
    /// Clear the insight-driven block highlight.
    ClearHighlight,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the save dialog and write the export.
    RequestExport,
    /// Recompute the pivot for the current selection.
    RequestRefresh,
}

impl State {
    /// Creates an idle panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pivot lifecycle state.
    #[must_use]
    pub fn status(&self) -> &PivotStatus {
        &self.status
    }

    /// The block an insight deep-linked to, if any.
    #[must_use]
    pub fn highlighted_block(&self) -> Option<&str> {
        self.highlighted_block.as_deref()
    }

    /// Marks a pivot block as highlighted (insight deep link).
    pub fn highlight_block(&mut self, block_id: impl Into<String>) {
        self.highlighted_block = Some(block_id.into());
    }

    /// Starts a new request for the given selection.
    ///
    /// Empty selections resolve to `Idle` immediately and return `None`;
    /// otherwise the panel enters `Loading` and the stamped request is
    /// returned for the app to dispatch.
    pub fn begin_request(
        &mut self,
        countries: &SelectionSet,
        categories: &SelectionSet,
    ) -> Option<PivotRequest> {
        self.generation += 1;

        if countries.is_empty() || categories.is_empty() {
            self.status = PivotStatus::Idle;
            return None;
        }

        self.status = PivotStatus::Loading;
        Some(PivotRequest {
            countries: countries.to_vec(),
            categories: categories.to_vec(),
            generation: self.generation,
        })
    }

    /// Applies a cached table for the current generation.
    pub fn apply_cached(&mut self, table: PivotTable) {
        self.status = PivotStatus::Ready(table);
    }

    /// Applies a computed response if it is not stale.
    ///
    /// Returns `true` when the response was accepted.
    pub fn apply_result(
        &mut self,
        generation: u64,
        result: Result<PivotTable, String>,
    ) -> bool {
        if generation != self.generation {
            // The selection moved on while this response was in flight.
            return false;
        }
        self.status = match result {
            Ok(table) => PivotStatus::Ready(table),
            Err(message) => PivotStatus::Failed(message),
        };
        true
    }

    /// Processes a message and returns the effect for the parent.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Export => Effect::RequestExport,
            Message::Retry => Effect::RequestRefresh,
            Message::ClearHighlight => {
                self.highlighted_block = None;
                Effect::None
            }
        }
    }

    /// Renders the panel.
    pub fn view<'a>(
        &'a self,
        catalog: &'a Catalog,
        countries: &'a SelectionSet,
        categories: &'a SelectionSet,
    ) -> Element<'a, Message> {
        let header = self.header(countries, categories, catalog);

        let body: Element<'a, Message> = match &self.status {
            PivotStatus::Idle => centered_note(
                "Pick countries and data layers in the wizard to preview a pivot.",
            ),
            PivotStatus::Loading => centered_note("Computing pivot…"),
            PivotStatus::Failed(message) => Column::new()
                .push(centered_note(message))
                .push(
                    Container::new(
                        button(Text::new("Retry").size(typography::BODY))
                            .style(styles::button_primary)
                            .on_press(Message::Retry),
                    )
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
                )
                .spacing(spacing::MD)
                .into(),
            PivotStatus::Ready(pivot) => {
                table::view(catalog, pivot, self.highlighted_block.as_deref())
            }
        };

        Container::new(
            Column::new()
                .push(header)
                .push(body)
                .spacing(spacing::LG)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
    }

    fn header<'a>(
        &'a self,
        countries: &'a SelectionSet,
        categories: &'a SelectionSet,
        catalog: &'a Catalog,
    ) -> Element<'a, Message> {
        let summary = Text::new(format!(
            "{} countries × {} layers · {} metrics",
            countries.len(),
            categories.len(),
            categories.metric_total(catalog)
        ))
        .size(typography::BODY_SM);

        let mut row = Row::new()
            .push(Container::new(summary).width(Length::Fill))
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center);

        if self.highlighted_block.is_some() {
            row = row.push(
                button(Text::new("Clear highlight").size(typography::BODY_SM))
                    .style(styles::button::text_link(false))
                    .on_press(Message::ClearHighlight),
            );
        }

        let mut export = button(Text::new("Export CSV").size(typography::BODY))
            .style(styles::button_primary);
        if !matches!(self.status, PivotStatus::Loading) {
            export = export.on_press(Message::Export);
        }
        row = row.push(export);

        row.into()
    }
}

fn centered_note(message: &str) -> Element<'_, Message> {
    Container::new(
        Text::new(message.to_string())
            .size(typography::BODY_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            }),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::{PivotCell, PivotRow};

    fn table() -> PivotTable {
        PivotTable {
            columns: vec!["nutrition".into()],
            rows: vec![PivotRow {
                country_id: "SAU".into(),
                cells: vec![PivotCell {
                    populated: 20,
                    tracked: 29,
                }],
            }],
        }
    }

    #[test]
    fn empty_selection_resolves_to_idle() {
        let mut state = State::new();
        let request = state.begin_request(&SelectionSet::new(), &SelectionSet::new());

        assert!(request.is_none());
        assert_eq!(state.status(), &PivotStatus::Idle);
    }

    #[test]
    fn non_empty_selection_enters_loading_with_stamped_request() {
        let mut state = State::new();
        let countries = SelectionSet::from_ids(["SAU"]);
        let categories = SelectionSet::from_ids(["nutrition"]);

        let request = state
            .begin_request(&countries, &categories)
            .expect("request should be issued");

        assert!(state.status().is_loading());
        assert_eq!(request.countries, vec!["SAU".to_string()]);
        assert_eq!(request.generation, 1);
    }

    #[test]
    fn current_generation_result_is_applied() {
        let mut state = State::new();
        let countries = SelectionSet::from_ids(["SAU"]);
        let categories = SelectionSet::from_ids(["nutrition"]);
        let request = state.begin_request(&countries, &categories).unwrap();

        assert!(state.apply_result(request.generation, Ok(table())));
        assert!(state.status().table().is_some());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = State::new();
        let countries = SelectionSet::from_ids(["SAU"]);
        let categories = SelectionSet::from_ids(["nutrition"]);
        let first = state.begin_request(&countries, &categories).unwrap();

        // Selection changes; a second request supersedes the first.
        let more = SelectionSet::from_ids(["SAU", "ARE"]);
        let _second = state.begin_request(&more, &categories).unwrap();

        assert!(!state.apply_result(first.generation, Ok(table())));
        assert!(state.status().is_loading());
    }

    #[test]
    fn failure_is_displayed_not_interpreted() {
        let mut state = State::new();
        let countries = SelectionSet::from_ids(["SAU"]);
        let categories = SelectionSet::from_ids(["nutrition"]);
        let request = state.begin_request(&countries, &categories).unwrap();

        state.apply_result(request.generation, Err("backend unreachable".into()));
        assert_eq!(
            state.status(),
            &PivotStatus::Failed("backend unreachable".into())
        );
    }

    #[test]
    fn highlight_is_set_and_cleared() {
        let mut state = State::new();
        state.highlight_block("health-systems");
        assert_eq!(state.highlighted_block(), Some("health-systems"));

        let effect = state.handle_message(Message::ClearHighlight);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.highlighted_block(), None);
    }

    #[test]
    fn export_and_retry_surface_as_effects() {
        let mut state = State::new();
        assert_eq!(state.handle_message(Message::Export), Effect::RequestExport);
        assert_eq!(state.handle_message(Message::Retry), Effect::RequestRefresh);
    }
}
