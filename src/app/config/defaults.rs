// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Autoplay**: Intersection ratio at which grid videos start playing
//! - **Search**: Delay between a keystroke and the visibility recompute

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default visible fraction of a grid video that starts playback.
pub const DEFAULT_AUTOPLAY_THRESHOLD: f32 = 0.5;

/// Minimum autoplay threshold.
pub const MIN_AUTOPLAY_THRESHOLD: f32 = 0.0;

/// Maximum autoplay threshold (the whole card must be on screen).
pub const MAX_AUTOPLAY_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default search debounce in milliseconds. Zero recomputes on every keystroke.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 0;

/// Maximum search debounce in milliseconds.
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_THRESHOLD >= 0.0);
    assert!(MAX_AUTOPLAY_THRESHOLD <= 1.0);
    assert!(DEFAULT_AUTOPLAY_THRESHOLD >= MIN_AUTOPLAY_THRESHOLD);
    assert!(DEFAULT_AUTOPLAY_THRESHOLD <= MAX_AUTOPLAY_THRESHOLD);

    assert!(DEFAULT_SEARCH_DEBOUNCE_MS <= MAX_SEARCH_DEBOUNCE_MS);
};
