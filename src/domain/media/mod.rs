// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the gallery's item model and the two pure matching
//! predicates. Nothing here knows about markup or widgets.

pub mod filter;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use filter::{matches_filter, FilterCategory, UnknownFilter};
pub use search::{matches_search, SearchQuery};
pub use types::{normalize_tags, ItemId, MediaRecord, MediaType, RecordDraft};
