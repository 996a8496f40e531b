// SPDX-License-Identifier: MPL-2.0
//! Grid geometry.
//!
//! Cards have a fixed size and flow left to right, so the vertical span of
//! any card follows from its position among the shown cards. The autoplay
//! ratios are computed from that span and the scroll viewport.

use crate::ui::design_tokens::sizing::{CARD_HEIGHT, CARD_WIDTH, HEADER_HEIGHT};
use crate::ui::design_tokens::spacing;
use iced::widget::scrollable::Viewport;
use iced::Size;

pub const GRID_SPACING: f32 = spacing::MD;
pub const GRID_PADDING: f32 = spacing::MD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// Number of columns that fit in `width`, at least one.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let usable = (width - 2.0 * GRID_PADDING).max(CARD_WIDTH);
        let columns = ((usable + GRID_SPACING) / (CARD_WIDTH + GRID_SPACING)).floor();
        Self {
            columns: (columns as usize).max(1),
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Top and bottom of the card at `position`, in content coordinates.
    #[must_use]
    pub fn card_span(&self, position: usize) -> (f32, f32) {
        let row = (position / self.columns) as f32;
        let top = GRID_PADDING + row * (CARD_HEIGHT + GRID_SPACING);
        (top, top + CARD_HEIGHT)
    }
}

/// Visible part of the scrollable grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridViewport {
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridViewport {
    /// Estimate used before the first scroll event, from the window size.
    #[must_use]
    pub fn from_window(size: Size) -> Self {
        Self {
            offset_y: 0.0,
            width: size.width,
            height: (size.height - HEADER_HEIGHT).max(0.0),
        }
    }

    #[must_use]
    pub fn from_scroll(viewport: &Viewport) -> Self {
        let bounds = viewport.bounds();
        Self {
            offset_y: viewport.absolute_offset().y,
            width: bounds.width,
            height: bounds.height,
        }
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::for_width(self.width)
    }

    /// Fraction of the card at `position` inside the viewport.
    #[must_use]
    pub fn card_ratio(&self, position: usize) -> f32 {
        let (top, bottom) = self.layout().card_span(position);
        intersection_ratio(top, bottom, self.offset_y, self.height)
    }
}

/// Fraction of `[top, bottom)` covered by `[view_top, view_top + view_height)`.
#[must_use]
pub fn intersection_ratio(top: f32, bottom: f32, view_top: f32, view_height: f32) -> f32 {
    let height = bottom - top;
    if height <= 0.0 || view_height <= 0.0 {
        return 0.0;
    }
    let visible = bottom.min(view_top + view_height) - top.max(view_top);
    (visible / height).clamp(0.0, 1.0)
}
