// SPDX-License-Identifier: MPL-2.0
//! Search query matching.
//!
//! The raw text of the search box is the source of truth. It is trimmed and
//! lower-cased only when a match is evaluated, never when stored.
//!
//! A record matches a non-blank query when the query equals one of its tags,
//! is a substring of one of its tags, or is a substring of its title. This is
//! a plain boolean OR with literal substring semantics: no ranking, no
//! stemming.

use super::MediaRecord;

/// Normalized form of a search box value, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Trims and lower-cases `raw`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns `true` when the query constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns `true` if `record` satisfies this query.
    #[must_use]
    pub fn matches(&self, record: &MediaRecord) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.needle.as_str();
        let tags = record.tags();

        tags.iter().any(|tag| tag == needle)
            || tags.iter().any(|tag| tag.contains(needle))
            || record.title_key().contains(needle)
    }
}

/// Search predicate over a raw query string. Total and side-effect free.
#[must_use]
pub fn matches_search(record: &MediaRecord, query: &str) -> bool {
    SearchQuery::new(query).matches(record)
}
