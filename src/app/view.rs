// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The sign-in strip sits above the gallery page; toasts float over both.

use super::Message;
use crate::gallery::{AutoplayObserver, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, GridViewport, ImageCache, PageProjection};
use crate::ui::login_panel;
use crate::ui::notifications::{self, Toast};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub projection: &'a PageProjection,
    pub search_text: &'a str,
    pub images: &'a ImageCache,
    pub autoplay: &'a AutoplayObserver,
    pub viewport: GridViewport,
    pub login: &'a login_panel::State,
    pub code_pending: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let login = login_panel::view(login_panel::ViewContext {
        i18n: ctx.i18n,
        state: ctx.login,
        code_pending: ctx.code_pending,
    })
    .map(Message::Login);

    let page = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.gallery.catalog(),
        projection: ctx.projection,
        filters: ctx.gallery.filter().offered(),
        search_text: ctx.search_text,
        images: ctx.images,
        autoplay: ctx.autoplay,
        viewport: ctx.viewport,
    })
    .map(Message::Gallery);

    let content = Column::new().push(login).push(page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(content).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
