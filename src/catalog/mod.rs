// SPDX-License-Identifier: MPL-2.0
//! Catalog loading.
//!
//! The catalog is read once from the page and never re-queried: after
//! [`Page::load`] the markup is only a projection target for the view.
//!
//! # Defaults
//!
//! Building a record from a [`MarkupNode`] never fails. Each annotation
//! has an explicit default:
//!
//! | Annotation           | Default when absent                         |
//! |----------------------|---------------------------------------------|
//! | `data-title`         | empty string                                |
//! | `data-tags`          | no tags                                     |
//! | `data-type`          | image (anything but `video` is image-like)  |
//! | `data-premium`       | `false` (only `"true"` counts)              |
//! | `data-is-free`       | `false` (only `"true"` counts)              |
//! | `data-download-url`  | none                                        |

pub mod markup;

pub use markup::{FilterButton, MarkupNode, PageMarkup};

use crate::domain::media::{FilterCategory, ItemId, MediaRecord, MediaType, RecordDraft};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Immutable, ordered collection of gallery items for one page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<MediaRecord>,
}

impl Catalog {
    /// Builds the catalog from markup nodes, preserving their order.
    #[must_use]
    pub fn from_nodes(nodes: &[MarkupNode]) -> Self {
        Self::from_drafts(nodes.iter().map(draft_from_node))
    }

    /// Builds the catalog from already-defaulted drafts, preserving their order.
    pub fn from_drafts(drafts: impl IntoIterator<Item = RecordDraft>) -> Self {
        let records = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| MediaRecord::from_draft(ItemId::new(index), draft))
            .inspect(|record| {
                tracing::debug!(
                    id = %record.id(),
                    title = record.title(),
                    tags = record.tags().len(),
                    video = record.is_video(),
                    "catalog record"
                );
            })
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&MediaRecord> {
        self.records.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Defaults one markup node into a draft. See the module table.
#[must_use]
pub fn draft_from_node(node: &MarkupNode) -> RecordDraft {
    RecordDraft {
        title: node.attribute("data-title").unwrap_or_default().to_string(),
        tags: node.attribute("data-tags").unwrap_or_default().to_string(),
        media_type: MediaType::from_attribute(node.attribute("data-type")),
        premium: is_true(node.attribute("data-premium")),
        free: is_true(node.attribute("data-is-free")),
        download_url: node.attribute("data-download-url").map(str::to_string),
        price: node.price_text.clone(),
        image_source: node.image_source.clone(),
        video_source: node.video_source.clone(),
        poster: node.poster.clone(),
    }
}

fn is_true(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim() == "true")
}

/// A loaded gallery page: its catalog and its filter bar.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub catalog: Catalog,
    /// Categories offered by the page, in page order. Falls back to every
    /// known category when the page declares none.
    pub filters: Vec<FilterCategory>,
    /// Category marked active on the page, `All` when none is.
    pub initial_filter: FilterCategory,
}

impl Page {
    /// Builds a page from its markup source text.
    ///
    /// Relative media sources and download targets are resolved against
    /// `base_dir` when one is given.
    ///
    /// # Errors
    ///
    /// Fails only when the markup itself cannot be read.
    pub fn from_source(source: &str, base_dir: Option<&Path>) -> Result<Self> {
        let mut markup = markup::parse(source)?;

        if let Some(base) = base_dir {
            for node in &mut markup.items {
                resolve_node(node, base);
            }
        }

        let mut filters = Vec::new();
        let mut initial_filter = FilterCategory::All;
        for button in &markup.filters {
            let category = button.value.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "treating filter button as 'all'");
                FilterCategory::All
            });
            if button.active {
                initial_filter = category;
            }
            if !filters.contains(&category) {
                filters.push(category);
            }
        }
        if filters.is_empty() {
            filters = FilterCategory::ALL.to_vec();
        }

        let catalog = Catalog::from_nodes(&markup.items);
        tracing::info!(items = catalog.len(), %initial_filter, "gallery page loaded");

        Ok(Self {
            catalog,
            filters,
            initial_filter,
        })
    }

    /// Reads and builds the page stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a markup error if
    /// it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source, path.parent())
    }
}

fn resolve_node(node: &mut MarkupNode, base: &Path) {
    for source in [
        &mut node.image_source,
        &mut node.video_source,
        &mut node.poster,
    ] {
        if let Some(value) = source.as_mut() {
            *value = resolve_reference(value, base);
        }
    }
    if let Some(url) = node.attribute("data-download-url") {
        let resolved = resolve_reference(url, base);
        node.replace_attribute("data-download-url", resolved);
    }
}

/// Turns a page-relative reference into a filesystem path string.
///
/// URLs (anything with a scheme) and absolute paths are kept as they are.
#[must_use]
pub fn resolve_reference(reference: &str, base: &Path) -> String {
    let trimmed = reference.trim();
    if trimmed.is_empty() || is_remote(trimmed) || Path::new(trimmed).is_absolute() {
        return reference.to_string();
    }
    let joined: PathBuf = base.join(trimmed);
    joined.to_string_lossy().into_owned()
}

/// Returns `true` for references carrying a URL scheme (`https:`, `data:`, ...).
#[must_use]
pub fn is_remote(reference: &str) -> bool {
    reference.contains("://") || reference.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_annotations_use_documented_defaults() {
        let draft = draft_from_node(&MarkupNode::default());
        assert_eq!(draft, RecordDraft::default());
    }

    #[test]
    fn flags_require_exact_true() {
        let node = MarkupNode::with_attributes([
            ("data-premium", " true "),
            ("data-is-free", "yes"),
        ]);
        let draft = draft_from_node(&node);
        assert!(draft.premium);
        assert!(!draft.free);

        let upper = draft_from_node(&MarkupNode::with_attributes([("data-premium", "TRUE")]));
        assert!(!upper.premium);
    }

    #[test]
    fn catalog_preserves_source_order_and_ids() {
        let nodes: Vec<_> = ["b", "a", "c"]
            .into_iter()
            .map(|title| MarkupNode::with_attributes([("data-title", title)]))
            .collect();
        let catalog = Catalog::from_nodes(&nodes);

        let titles: Vec<_> = catalog.iter().map(MediaRecord::title).collect();
        assert_eq!(titles, ["b", "a", "c"]);
        for (index, record) in catalog.iter().enumerate() {
            assert_eq!(record.id(), ItemId::new(index));
        }
        assert_eq!(catalog.get(ItemId::new(1)).map(MediaRecord::title), Some("a"));
        assert!(catalog.get(ItemId::new(3)).is_none());
    }

    #[test]
    fn page_reads_active_filter_and_resolves_sources() {
        let source = r#"
            <button class="filter-btn" data-filter="all">All</button>
            <button class="filter-btn active" data-filter="premium">Premium</button>
            <div class="media-box" data-title="Cliff" data-download-url="files/cliff.jpg">
              <img src="img/cliff.jpg">
            </div>
            <div class="media-box" data-title="Remote" data-download-url="https://cdn.example/r.jpg">
              <img src="https://cdn.example/r-thumb.jpg">
            </div>"#;
        let base = Path::new("/srv/gallery");
        let page = Page::from_source(source, Some(base)).expect("page should load");

        assert_eq!(page.initial_filter, FilterCategory::Premium);
        assert_eq!(page.filters, [FilterCategory::All, FilterCategory::Premium]);

        let cliff = page.catalog.get(ItemId::new(0)).expect("first record");
        assert_eq!(
            cliff.image_source(),
            Some(base.join("img/cliff.jpg").to_string_lossy().as_ref())
        );
        assert_eq!(
            cliff.download_url(),
            Some(base.join("files/cliff.jpg").to_string_lossy().as_ref())
        );

        let remote = page.catalog.get(ItemId::new(1)).expect("second record");
        assert_eq!(remote.download_url(), Some("https://cdn.example/r.jpg"));
        assert_eq!(remote.image_source(), Some("https://cdn.example/r-thumb.jpg"));
    }

    #[test]
    fn page_without_filter_bar_offers_every_category() {
        let page = Page::from_source(r#"<div class="media-box"></div>"#, None)
            .expect("page should load");
        assert_eq!(page.filters, FilterCategory::ALL.to_vec());
        assert_eq!(page.initial_filter, FilterCategory::All);
        assert_eq!(page.catalog.len(), 1);
    }

    #[test]
    fn load_reads_page_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("index.html");
        std::fs::write(
            &path,
            r#"<div class="media-box" data-title="Disk"><img src="disk.png"></div>"#,
        )
        .expect("write page");

        let page = Page::load(&path).expect("page should load");
        let record = page.catalog.get(ItemId::new(0)).expect("record");
        assert_eq!(record.title(), "Disk");
        assert_eq!(
            record.image_source(),
            Some(dir.path().join("disk.png").to_string_lossy().as_ref())
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Page::load(Path::new("/definitely/not/here.html"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
