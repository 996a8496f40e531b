// SPDX-License-Identifier: MPL-2.0
//! Media grid and the no-results indicator.

use super::layout::{GridViewport, GRID_PADDING, GRID_SPACING};
use super::{Message, ViewContext};
use crate::domain::media::MediaRecord;
use crate::gallery::DownloadSource;
use crate::ui::design_tokens::sizing::{CARD_HEIGHT, CARD_WIDTH, THUMBNAIL_HEIGHT};
use crate::ui::design_tokens::{badge, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, image, mouse_area, Column, Container, Id, Row, Scrollable, Stack, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length};

/// Widget id of the grid scrollable.
pub const GRID_SCROLL_ID: &str = "gallery-grid";

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.projection.no_results_visible() {
        return no_results(ctx);
    }

    let shown: Vec<&MediaRecord> = ctx
        .projection
        .visible_items()
        .filter_map(|id| ctx.catalog.get(id))
        .collect();
    let columns = ctx.viewport.layout().columns();

    let mut rows = Column::new().spacing(GRID_SPACING).padding(GRID_PADDING);
    for chunk in shown.chunks(columns) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(GRID_SPACING), |row, record| {
                row.push(card(ctx, record))
            });
        rows = rows.push(row);
    }

    Scrollable::new(rows)
        .id(Id::new(GRID_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::GridScrolled(GridViewport::from_scroll(&viewport)))
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, record: &'a MediaRecord) -> Element<'a, Message> {
    let id = record.id();
    let i18n = ctx.i18n;

    let thumbnail = mouse_area(thumbnail(ctx, record))
        .on_press(Message::CardPressed(id))
        .interaction(mouse::Interaction::Pointer);

    let title = Text::new(record.title()).size(typography::BODY_LG);

    let mut badges = Row::new().spacing(spacing::XXS);
    if record.is_video() {
        badges = badges.push(badge_label(i18n.tr("card-badge-video"), badge::VIDEO));
    }
    if record.is_premium() {
        badges = badges.push(badge_label(i18n.tr("card-badge-premium"), badge::PREMIUM));
    }
    if record.is_free() {
        badges = badges.push(badge_label(i18n.tr("card-badge-free"), badge::FREE));
    }

    let tags = Text::new(record.tags().join(" · "))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("card-preview")).size(typography::BODY_SM))
                .on_press(Message::CardPressed(id))
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("card-download")).size(typography::BODY_SM))
                .on_press(Message::DownloadPressed(DownloadSource::Item(id)))
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(title)
        .push(badges)
        .push(tags)
        .push(actions);

    Container::new(content)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

fn thumbnail<'a>(ctx: &ViewContext<'a>, record: &'a MediaRecord) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match record
        .fallback_image()
        .and_then(|src| ctx.images.handle(src))
    {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(record),
    };

    if !record.is_video() {
        return picture;
    }

    let label = if ctx.autoplay.is_playing(record.id()) {
        ctx.i18n.tr("card-video-playing")
    } else {
        ctx.i18n.tr("card-video-paused")
    };
    let indicator = Container::new(
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM)),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .height(Length::Fixed(THUMBNAIL_HEIGHT))
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Bottom);

    Stack::new().push(picture).push(indicator).into()
}

fn placeholder<'a>(record: &MediaRecord) -> Element<'a, Message> {
    let glyph = if record.is_video() { "▶" } else { "▦" };
    Container::new(Text::new(glyph).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fixed(THUMBNAIL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn badge_label<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION).color(palette::WHITE))
        .padding([0.0, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

fn no_results<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr("gallery-no-results"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

