// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the gallery views.
//!
//! Every color, gap, size and radius used by the grid, the preview modal,
//! the sign-in strip and the toasts comes from here. Card geometry lives
//! here too, because the autoplay ratios are computed from the same numbers
//! the grid is drawn with.
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette, sizing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(sizing::THUMBNAIL_HEIGHT < sizing::CARD_HEIGHT);
//! # let _ = backdrop;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Card badge colors, one per thing a visitor filters or pays for.
pub mod badge {
    use super::{palette, Color};

    pub const VIDEO: Color = palette::INFO_500;
    pub const PREMIUM: Color = palette::WARNING_500;
    pub const FREE: Color = palette::SUCCESS_500;
}

pub mod opacity {
    /// Hover tint on toast buttons, outline of card indicators.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Preview backdrop and card indicators.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Modal panel and toast surfaces.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Grid card, thumbnail included.
    pub const CARD_WIDTH: f32 = 240.0;
    pub const CARD_HEIGHT: f32 = 272.0;
    pub const THUMBNAIL_HEIGHT: f32 = 150.0;

    /// Space above the grid taken by the sign-in strip, the search field and
    /// the filter buttons.
    pub const HEADER_HEIGHT: f32 = 172.0;

    pub const MODAL_MAX_WIDTH: f32 = 720.0;
}

pub mod typography {
    /// Play glyph on video thumbnails.
    pub const TITLE_LG: f32 = 30.0;
    /// Preview title.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    /// Card titles, search field.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges and tag lines.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Title, tags and buttons sit below the thumbnail.
    assert!(sizing::THUMBNAIL_HEIGHT + sizing::BUTTON_HEIGHT < sizing::CARD_HEIGHT);
    assert!(sizing::MODAL_MAX_WIDTH > sizing::CARD_WIDTH);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::SURFACE);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_are_distinct() {
        assert_ne!(badge::VIDEO, badge::PREMIUM);
        assert_ne!(badge::PREMIUM, badge::FREE);
        assert_ne!(badge::VIDEO, badge::FREE);
    }

    #[test]
    fn two_cards_fit_the_minimum_window() {
        let min_width = crate::app::MIN_WINDOW_WIDTH as f32;
        assert!(2.0 * sizing::CARD_WIDTH + 3.0 * spacing::MD <= min_width);
    }
}
