// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch: navbar, active screen, toast overlay.

use super::config::Config;
use super::{Message, Screen};
use crate::catalog::Catalog;
use crate::ui::notifications::Toast;
use crate::ui::{guide, navbar, notifications, preview, settings, wizard};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Read-only view of the application state needed for rendering.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub catalog: &'a Catalog,
    pub config: &'a Config,
    pub wizard: &'a wizard::State,
    pub guide: Option<&'a guide::State>,
    pub preview: &'a preview::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_ctx = navbar::ViewContext {
        screen: ctx.screen,
        selection_summary: format!(
            "{} countries · {} layers",
            ctx.wizard.countries().len(),
            ctx.wizard.categories().len()
        ),
    };
    let bar = navbar::view(navbar_ctx).map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.screen {
        Screen::Wizard => ctx.wizard.view(ctx.catalog).map(Message::Wizard),
        Screen::Guide => match ctx.guide {
            Some(guide_state) => guide_state.view(ctx.catalog).map(Message::Guide),
            // The guide state is created on screen entry; an empty frame is
            // only ever visible for the single render of a race.
            None => iced::widget::text("").into(),
        },
        Screen::Preview => ctx
            .preview
            .view(ctx.catalog, ctx.wizard.countries(), ctx.wizard.categories())
            .map(Message::Preview),
        Screen::Settings => {
            settings::view(settings::ViewContext { config: ctx.config }).map(Message::Settings)
        }
    };

    let content = Column::new()
        .push(bar)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new().push(content).push(toasts).into()
}
