// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Item model ([`MediaRecord`](media::MediaRecord),
//!   [`MediaType`](media::MediaType)) and matching
//!   ([`SearchQuery`](media::SearchQuery), [`FilterCategory`](media::FilterCategory))

pub mod media;
