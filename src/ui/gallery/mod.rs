// SPDX-License-Identifier: MPL-2.0
//! Gallery page view.
//!
//! Renders the [`PageProjection`] together with the catalog: search field,
//! filter bar, card grid (or the no-results indicator) and, when open, the
//! preview modal on top. Widget events come back as [`Message`]s for the
//! application to translate into controller input.

pub mod filter_bar;
pub mod grid;
pub mod image_cache;
pub mod layout;
pub mod preview_modal;
pub mod projection;

pub use image_cache::ImageCache;
pub use layout::{GridLayout, GridViewport};
pub use projection::{ModalProjection, PageProjection};

use crate::catalog::Catalog;
use crate::domain::media::{FilterCategory, ItemId};
use crate::gallery::{AutoplayObserver, DownloadSource, HitTarget};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub projection: &'a PageProjection,
    /// Filter buttons offered by the page, in page order.
    pub filters: &'a [FilterCategory],
    /// Search field content as typed.
    pub search_text: &'a str,
    pub images: &'a ImageCache,
    pub autoplay: &'a AutoplayObserver,
    pub viewport: GridViewport,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchInput(String),
    FilterPressed(FilterCategory),
    CardPressed(ItemId),
    DownloadPressed(DownloadSource),
    ClosePressed,
    Pointer(HitTarget),
    GridScrolled(GridViewport),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .height(Length::Fill)
        .push(filter_bar::search_bar(&ctx))
        .push(filter_bar::filter_bar(&ctx))
        .push(grid::view(&ctx));

    if ctx.projection.modal().open {
        Stack::new()
            .push(page)
            .push(preview_modal::view(&ctx))
            .into()
    } else {
        page.into()
    }
}
