// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn style(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    style(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Main action: downloads, sending and verifying codes.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => style(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => style(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => disabled(theme),
    }
}

/// Active filter button. Same brand colors as [`primary`].
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Inactive filter buttons and secondary actions.
/// Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            style(bg_color, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            style(hover_bg, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => disabled(theme),
    }
}
