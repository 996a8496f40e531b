// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from a borrowed view context and reports widget events as
//! messages for the application to route.
//!
//! - [`gallery`] - Search field, filter bar, card grid and preview modal
//! - [`login_panel`] - Demo sign-in strip (Gmail button, phone code)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod login_panel;
pub mod notifications;
pub mod styles;
pub mod theming;
