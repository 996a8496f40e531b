// SPDX-License-Identifier: MPL-2.0
//! Image handles for card thumbnails and the preview.
//!
//! Local sources are opened lazily by the renderer. HTTP sources are fetched
//! once in the background and their bytes kept here.

use crate::catalog::Catalog;
use iced::widget::image::Handle;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ImageCache {
    fetched: HashMap<String, Handle>,
    failed: HashSet<String>,
}

/// Whether `src` must be fetched over the network.
#[must_use]
pub fn is_http(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

impl ImageCache {
    /// Distinct HTTP image sources of the catalog, in page order.
    #[must_use]
    pub fn remote_sources(catalog: &Catalog) -> Vec<String> {
        let mut seen = HashSet::new();
        catalog
            .iter()
            .flat_map(|record| [record.image_source(), record.poster()])
            .flatten()
            .filter(|src| is_http(src))
            .filter(|src| seen.insert(src.to_string()))
            .map(str::to_string)
            .collect()
    }

    pub fn insert(&mut self, src: String, bytes: Vec<u8>) {
        self.failed.remove(&src);
        self.fetched.insert(src, Handle::from_bytes(bytes));
    }

    pub fn mark_failed(&mut self, src: String) {
        self.failed.insert(src);
    }

    /// Handle to draw for `src`, or `None` while it is unavailable.
    #[must_use]
    pub fn handle(&self, src: &str) -> Option<Handle> {
        if src.trim().is_empty() || self.failed.contains(src) {
            return None;
        }
        if is_http(src) {
            return self.fetched.get(src).cloned();
        }
        if src.starts_with("data:") {
            return None;
        }
        let path = src.strip_prefix("file://").unwrap_or(src);
        Some(Handle::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::RecordDraft;

    #[test]
    fn remote_sources_are_deduplicated() {
        let catalog = Catalog::from_drafts([
            RecordDraft {
                image_source: Some("https://cdn.example/a.jpg".into()),
                ..RecordDraft::default()
            },
            RecordDraft {
                image_source: Some("local/b.jpg".into()),
                poster: Some("https://cdn.example/a.jpg".into()),
                ..RecordDraft::default()
            },
            RecordDraft {
                poster: Some("http://cdn.example/c.jpg".into()),
                ..RecordDraft::default()
            },
        ]);

        assert_eq!(
            ImageCache::remote_sources(&catalog),
            ["https://cdn.example/a.jpg", "http://cdn.example/c.jpg"]
        );
    }

    #[test]
    fn remote_handle_waits_for_fetch() {
        let mut cache = ImageCache::default();
        let src = "https://cdn.example/a.jpg";
        assert!(cache.handle(src).is_none());

        cache.insert(src.to_string(), vec![0, 1, 2]);
        assert!(cache.handle(src).is_some());
    }

    #[test]
    fn failed_and_unsupported_sources_have_no_handle() {
        let mut cache = ImageCache::default();
        cache.mark_failed("/gallery/missing.jpg".to_string());
        assert!(cache.handle("/gallery/missing.jpg").is_none());
        assert!(cache.handle("data:image/png;base64,AAAA").is_none());
        assert!(cache.handle("  ").is_none());
        assert!(cache.handle("/gallery/present.jpg").is_some());
    }
}
