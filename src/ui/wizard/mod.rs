// SPDX-License-Identifier: MPL-2.0
//! The two-phase selection wizard: countries first, then data layers.
//!
//! The component owns one [`SelectionSet`] per phase and a [`PhaseMachine`];
//! every mutation is reported upward through an [`Effect`] so the parent can
//! refresh the pivot preview. The phase gate (no data layers before at least
//! one country) lives in the machine, not in the view code.

mod category_list;
mod controls;
mod country_grid;

use crate::catalog::Catalog;
use crate::flow::{PhaseMachine, PhaseStep, WizardPhase};
use crate::selection::SelectionSet;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container};
use iced::{event, keyboard, Element, Length};

/// Wizard component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: PhaseMachine,
    countries: SelectionSet,
    categories: SelectionSet,
}

/// Messages handled by the wizard.
#[derive(Debug, Clone)]
pub enum Message {
    /// A country card was clicked.
    ToggleCountry(String),
    /// A category row was clicked.
    ToggleCategory(String),
    /// A region chip was clicked: select the whole region, or deselect it
    /// if every member is already selected.
    ToggleRegion(String),
    /// Select every category.
    SelectAllCategories,
    /// Clear the current phase's selection.
    ClearPhase,
    /// The Continue button (or ArrowRight).
    Continue,
    /// The Back button (or ArrowLeft).
    Back,
    /// A phase breadcrumb was clicked.
    PhaseClicked(WizardPhase),
    /// Raw window event routed from the app subscription.
    RawEvent(event::Event),
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A selection set changed; carries nothing, the parent reads the
    /// current sets back through accessors.
    SelectionChanged,
    /// The wizard finished (continue past the last phase).
    Completed,
    /// Escape was pressed.
    Close,
}

impl State {
    /// Creates a wizard with empty selections at the first phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wizard pre-seeded with selections (deep links, tests).
    #[must_use]
    pub fn with_selection(countries: SelectionSet, categories: SelectionSet) -> Self {
        Self {
            phase: PhaseMachine::new(),
            countries,
            categories,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        self.phase.current()
    }

    /// Selected country IDs.
    #[must_use]
    pub fn countries(&self) -> &SelectionSet {
        &self.countries
    }

    /// Selected category IDs.
    #[must_use]
    pub fn categories(&self) -> &SelectionSet {
        &self.categories
    }

    /// Whether Continue is currently allowed.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.phase.can_advance(self.countries.len())
    }

    /// Processes a message and returns the effect for the parent.
    pub fn handle_message(&mut self, message: Message, catalog: &Catalog) -> Effect {
        match message {
            Message::ToggleCountry(id) => {
                self.countries.toggle(&id);
                Effect::SelectionChanged
            }
            Message::ToggleCategory(id) => {
                self.categories.toggle(&id);
                Effect::SelectionChanged
            }
            Message::ToggleRegion(region_id) => self.toggle_region(&region_id, catalog),
            Message::SelectAllCategories => {
                self.categories
                    .select_all(catalog.categories().iter().map(|c| c.id.as_str()));
                Effect::SelectionChanged
            }
            Message::ClearPhase => {
                match self.phase.current() {
                    WizardPhase::Countries => self.countries.clear(),
                    WizardPhase::DataLayers => self.categories.clear(),
                }
                Effect::SelectionChanged
            }
            Message::Continue => match self.phase.advance(self.countries.len()) {
                PhaseStep::Completed => Effect::Completed,
                _ => Effect::None,
            },
            Message::Back => {
                self.phase.back();
                Effect::None
            }
            Message::PhaseClicked(target) => {
                self.phase.phase_click(target, self.countries.len());
                Effect::None
            }
            Message::RawEvent(raw) => self.handle_raw_event(raw, catalog),
        }
    }

    /// Region chip semantics: selecting a fully-selected region deselects
    /// it, anything else selects the missing members.
    fn toggle_region(&mut self, region_id: &str, catalog: &Catalog) -> Effect {
        let Some(region) = catalog.regions().iter().find(|r| r.id == region_id) else {
            return Effect::None;
        };
        let members = region.country_ids.iter().map(String::as_str);
        if !region.country_ids.is_empty() && self.countries.contains_all(members.clone()) {
            self.countries.deselect_all(members);
        } else {
            self.countries.select_all(members);
        }
        Effect::SelectionChanged
    }

    fn handle_raw_event(&mut self, raw: event::Event, catalog: &Catalog) -> Effect {
        match raw {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => self.handle_message(Message::Continue, catalog),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => self.handle_message(Message::Back, catalog),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Effect::Close,
            _ => Effect::None,
        }
    }

    /// Renders the wizard for the current phase.
    pub fn view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        let header = controls::phase_header(self);
        let body: Element<'a, Message> = match self.phase.current() {
            WizardPhase::Countries => country_grid::view(catalog, &self.countries),
            WizardPhase::DataLayers => category_list::view(catalog, &self.categories),
        };
        let footer = controls::footer(self, catalog);

        Container::new(
            Column::new()
                .push(header)
                .push(body)
                .push(footer)
                .spacing(spacing::LG)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
