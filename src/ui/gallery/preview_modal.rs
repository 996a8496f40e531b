// SPDX-License-Identifier: MPL-2.0
//! Preview modal overlay.
//!
//! The backdrop and the content panel report pointer presses separately so
//! the controller can tell a press on the background itself from one inside
//! the panel. Presses handled by the panel's buttons report neither.

use super::{Message, ViewContext};
use crate::gallery::{DownloadSource, HitTarget};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

const MEDIA_HEIGHT: f32 = 420.0;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = opaque(
        mouse_area(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Pointer(HitTarget::Backdrop)),
    );

    let centered = Container::new(
        mouse_area(panel(ctx)).on_press(Message::Pointer(HitTarget::Content)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::XL);

    Stack::new().push(backdrop).push(centered).into()
}

fn panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modal = ctx.projection.modal();
    let i18n = ctx.i18n;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(modal.title.clone())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("preview-close")))
                .on_press(Message::ClosePressed)
                .style(styles::button::unselected),
        );

    let price = Text::new(i18n.tr_with_args("preview-price", &[("price", modal.price.as_str())]))
        .size(typography::BODY_LG);

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(price).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("preview-download")))
                .on_press(Message::DownloadPressed(DownloadSource::Preview))
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(media(ctx))
        .push(footer);

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_MAX_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn media<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modal = ctx.projection.modal();

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fixed(MEDIA_HEIGHT));

    let picture = modal.shown_image().and_then(|src| ctx.images.handle(src));
    let has_picture = picture.is_some();
    if let Some(handle) = picture {
        layers = layers.push(
            image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        );
    }

    if modal.video_visible {
        let status = match modal.video_src.as_deref() {
            Some(src) if modal.video_playing => {
                ctx.i18n.tr_with_args("preview-video-playing", &[("source", src)])
            }
            Some(_) => ctx.i18n.tr("preview-video-paused"),
            None => ctx.i18n.tr("preview-video-unavailable"),
        };
        layers = layers.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(Text::new("▶").size(typography::TITLE_LG).color(palette::WHITE))
                    .push(Text::new(status).size(typography::BODY).color(palette::WHITE)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::video_surface),
        );
    }

    if !has_picture && !modal.video_visible {
        layers = layers.push(
            Container::new(
                Text::new(ctx.i18n.tr("preview-no-media")).color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder),
        );
    }

    layers.into()
}
