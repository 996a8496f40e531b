// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! A [`MediaRecord`] is built exactly once from a [`RecordDraft`]; the
//! normalization of the title and tags used for matching happens there and
//! nowhere else.

use std::fmt;

/// Represents the two kinds of media a gallery item can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    /// Still image. Items without a recognizable type annotation land here.
    #[default]
    Image,
    /// Video clip, previewed with playback.
    Video,
}

impl MediaType {
    /// Total parse of a type annotation.
    ///
    /// Only `video` (case-insensitive, trimmed) selects [`MediaType::Video`];
    /// absent or unknown values are image-like.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(raw) if raw.trim().eq_ignore_ascii_case("video") => Self::Video,
            _ => Self::Image,
        }
    }

    /// Returns `true` for [`MediaType::Video`].
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Non-owning handle to a gallery item.
///
/// This is the item's position in source order. The presentation layer owns
/// the visual element; the core only names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw, already-defaulted values read from a page for one item.
///
/// Every field has a documented default so that building a record never
/// fails:
/// - `title`: empty string when absent
/// - `tags`: the raw comma-separated list, empty when absent
/// - `media_type`: see [`MediaType::from_attribute`]
/// - `premium` / `free`: `false` unless annotated `"true"`
/// - everything optional stays `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub title: String,
    pub tags: String,
    pub media_type: MediaType,
    pub premium: bool,
    pub free: bool,
    pub download_url: Option<String>,
    pub price: Option<String>,
    pub image_source: Option<String>,
    pub video_source: Option<String>,
    pub poster: Option<String>,
}

/// Immutable gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    id: ItemId,
    title: String,
    title_key: String,
    tags: Vec<String>,
    media_type: MediaType,
    premium: bool,
    free: bool,
    download_url: Option<String>,
    price: Option<String>,
    image_source: Option<String>,
    video_source: Option<String>,
    poster: Option<String>,
}

impl MediaRecord {
    /// Builds a record, normalizing the title key and the tag list.
    ///
    /// Blank optional strings are treated as absent.
    #[must_use]
    pub fn from_draft(id: ItemId, draft: RecordDraft) -> Self {
        let title_key = draft.title.to_lowercase();
        let tags = normalize_tags(&draft.tags);

        Self {
            id,
            title: draft.title,
            title_key,
            tags,
            media_type: draft.media_type,
            premium: draft.premium,
            free: draft.free,
            download_url: non_blank(draft.download_url),
            price: non_blank(draft.price).map(|price| price.trim().to_string()),
            image_source: non_blank(draft.image_source),
            video_source: non_blank(draft.video_source),
            poster: non_blank(draft.poster),
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Title exactly as annotated on the page.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lower-cased title used for matching.
    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    /// Lower-cased, trimmed, non-empty tags in source order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type.is_video()
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.free
    }

    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// Text of the price annotation, if the item carries one.
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    #[must_use]
    pub fn image_source(&self) -> Option<&str> {
        self.image_source.as_deref()
    }

    #[must_use]
    pub fn video_source(&self) -> Option<&str> {
        self.video_source.as_deref()
    }

    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref()
    }

    /// Image to show when a video item has nothing playable.
    #[must_use]
    pub fn fallback_image(&self) -> Option<&str> {
        self.poster().or_else(|| self.image_source())
    }
}

/// Splits a comma-separated tag list into lower-cased, trimmed, non-empty tags.
#[must_use]
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
