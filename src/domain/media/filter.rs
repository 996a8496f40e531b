// SPDX-License-Identifier: MPL-2.0
//! Filter categories for the gallery's filter bar.
//!
//! The gallery offers four mutually exclusive categories. Parsing a category
//! from page markup or configuration is total: anything unrecognized opens
//! up to [`FilterCategory::All`] instead of hiding the whole catalog.

use super::MediaRecord;
use std::fmt;
use std::str::FromStr;

/// Mutually exclusive grouping selected in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCategory {
    /// Every item.
    #[default]
    All,
    /// Still images only.
    Image,
    /// Videos only.
    Video,
    /// Items flagged as premium, whatever their type.
    Premium,
}

impl FilterCategory {
    /// All categories in filter bar order.
    pub const ALL: [FilterCategory; 4] = [Self::All, Self::Image, Self::Video, Self::Premium];

    /// Returns `true` if `record` belongs to this category.
    #[must_use]
    pub fn matches(self, record: &MediaRecord) -> bool {
        match self {
            Self::All => true,
            Self::Image => !record.is_video(),
            Self::Video => record.is_video(),
            Self::Premium => record.is_premium(),
        }
    }

    /// Value used in `data-filter` annotations and `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Image => "image",
            Self::Video => "video",
            Self::Premium => "premium",
        }
    }

    /// Total parse: unknown or missing values fail open to [`FilterCategory::All`].
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        value.and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`FilterCategory::from_str`] for values outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter category '{}'", self.0)
    }
}

impl FromStr for FilterCategory {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "premium" => Ok(Self::Premium),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// Filter predicate. Total and side-effect free.
#[must_use]
pub fn matches_filter(record: &MediaRecord, category: FilterCategory) -> bool {
    category.matches(record)
}
