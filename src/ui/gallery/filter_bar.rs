// SPDX-License-Identifier: MPL-2.0
//! Search field and filter buttons.

use super::{Message, ViewContext};
use crate::domain::media::FilterCategory;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Id, Row, Text};
use iced::{alignment, Element, Length};

/// Widget id of the search field, focused at startup.
pub const SEARCH_INPUT_ID: &str = "gallery-search";

pub fn search_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    text_input(&ctx.i18n.tr("search-placeholder"), ctx.search_text)
        .id(Id::new(SEARCH_INPUT_ID))
        .on_input(Message::SearchInput)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .into()
}

pub fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.projection.active_filter();
    ctx.filters
        .iter()
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
            |row, category| {
                let label = Text::new(ctx.i18n.tr(label_key(*category))).size(typography::BODY);
                let style = if *category == active {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(label)
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .padding([spacing::XS, spacing::MD])
                        .on_press(Message::FilterPressed(*category))
                        .style(style),
                )
            },
        )
        .into()
}

fn label_key(category: FilterCategory) -> &'static str {
    match category {
        FilterCategory::All => "filter-all",
        FilterCategory::Image => "filter-image",
        FilterCategory::Video => "filter-video",
        FilterCategory::Premium => "filter-premium",
    }
}
