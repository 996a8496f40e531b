// SPDX-License-Identifier: MPL-2.0
//! Filter bar selection.
//!
//! Exactly one category is active at any time. Switching replaces the
//! previous category in a single assignment, so no observer can see zero or
//! two active categories.

use crate::domain::media::FilterCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    active: FilterCategory,
    offered: Vec<FilterCategory>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new(FilterCategory::ALL.to_vec(), FilterCategory::All)
    }
}

impl FilterSelection {
    /// Creates the selection for a filter bar.
    ///
    /// An empty bar falls back to every category. `initial` is kept even
    /// when the bar does not offer it, matching a page whose active button
    /// is not part of the bar.
    #[must_use]
    pub fn new(offered: Vec<FilterCategory>, initial: FilterCategory) -> Self {
        let offered = if offered.is_empty() {
            FilterCategory::ALL.to_vec()
        } else {
            offered
        };
        Self {
            active: initial,
            offered,
        }
    }

    #[must_use]
    pub fn active(&self) -> FilterCategory {
        self.active
    }

    /// Categories shown in the filter bar, in bar order.
    #[must_use]
    pub fn offered(&self) -> &[FilterCategory] {
        &self.offered
    }

    /// Activates `category`. Returns `true` if the selection changed.
    pub fn select(&mut self, category: FilterCategory) -> bool {
        let previous = std::mem::replace(&mut self.active, category);
        if previous != category {
            tracing::debug!(from = %previous, to = %category, "filter selected");
        }
        previous != category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_with_full_bar() {
        let selection = FilterSelection::default();
        assert_eq!(selection.active(), FilterCategory::All);
        assert_eq!(selection.offered(), FilterCategory::ALL);
    }

    #[test]
    fn select_reports_changes() {
        let mut selection = FilterSelection::default();
        assert!(selection.select(FilterCategory::Video));
        assert!(!selection.select(FilterCategory::Video));
        assert!(selection.select(FilterCategory::All));
    }

    #[test]
    fn exactly_one_category_is_selected() {
        let mut selection = FilterSelection::default();
        for category in FilterCategory::ALL {
            selection.select(category);
            let selected: Vec<_> = selection
                .offered()
                .iter()
                .filter(|c| **c == selection.active())
                .collect();
            assert_eq!(selected, [&category]);
        }
    }

    #[test]
    fn empty_bar_offers_everything() {
        let selection = FilterSelection::new(Vec::new(), FilterCategory::Premium);
        assert_eq!(selection.offered().len(), FilterCategory::ALL.len());
        assert_eq!(selection.active(), FilterCategory::Premium);
    }
}
