// SPDX-License-Identifier: MPL-2.0
//! Visibility reducer.
//!
//! Combines the catalog, the raw search text and the active filter into one
//! visibility decision per item. Every call is a full re-evaluation over the
//! catalog; there is no incremental path and no caching between calls.

use crate::catalog::Catalog;
use crate::domain::media::{FilterCategory, ItemId, SearchQuery};

/// Result of one reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    per_item: Vec<bool>,
    any_visible: bool,
}

impl Visibility {
    /// Returns whether the item is shown. Unknown ids are hidden.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.per_item.get(id.index()).copied().unwrap_or(false)
    }

    /// Logical OR across all items.
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.any_visible
    }

    /// The empty-state indicator is shown exactly when nothing is visible.
    #[must_use]
    pub fn no_results_visible(&self) -> bool {
        !self.any_visible
    }

    /// Visible item ids in source order.
    pub fn visible_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.per_item
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(index, _)| ItemId::new(index))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.per_item.iter().filter(|visible| **visible).count()
    }

    /// Per-item flags in source order.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.per_item
    }
}

/// Recomputes visibility for every item.
///
/// An item is visible iff it matches both the query and the category.
#[must_use]
pub fn recompute(catalog: &Catalog, query: &str, category: FilterCategory) -> Visibility {
    let query = SearchQuery::new(query);
    let per_item: Vec<bool> = catalog
        .iter()
        .map(|record| query.matches(record) && category.matches(record))
        .collect();
    let any_visible = per_item.iter().any(|visible| *visible);

    tracing::debug!(
        query = query.as_str(),
        %category,
        visible = per_item.iter().filter(|v| **v).count(),
        total = per_item.len(),
        "recomputed visibility"
    );

    Visibility {
        per_item,
        any_visible,
    }
}
