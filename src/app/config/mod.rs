// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Initial filter, autoplay threshold, search debounce
//! - `[downloads]` - Target directory for downloaded media
//!
//! Search text and the active filter are never written here; they live only
//! as long as the window.
//!
//! The file is edited by hand; the application only reads it.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("theme: {:?}", config.general.theme_mode);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::media::FilterCategory;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Filter selected at startup instead of the page's active button
    /// (`all`, `image`, `video`, `premium`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_filter: Option<String>,

    /// Visible fraction of a grid video that starts playback.
    #[serde(
        default = "default_autoplay_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_threshold: Option<f32>,

    /// Delay before a query reaches the search engine. `0` disables it.
    #[serde(
        default = "default_search_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_debounce_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_filter: None,
            autoplay_threshold: default_autoplay_threshold(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl GalleryConfig {
    /// Configured initial filter. Unknown values are logged and ignored.
    #[must_use]
    pub fn default_filter(&self) -> Option<FilterCategory> {
        let raw = self.default_filter.as_deref()?;
        match raw.parse::<FilterCategory>() {
            Ok(category) => Some(category),
            Err(err) => {
                tracing::warn!(%err, "ignoring gallery.default_filter");
                None
            }
        }
    }

    /// Autoplay threshold clamped to `MIN..=MAX`.
    #[must_use]
    pub fn autoplay_threshold(&self) -> f32 {
        match self.autoplay_threshold {
            Some(value) if value.is_finite() => {
                value.clamp(MIN_AUTOPLAY_THRESHOLD, MAX_AUTOPLAY_THRESHOLD)
            }
            _ => DEFAULT_AUTOPLAY_THRESHOLD,
        }
    }

    /// Search debounce clamped to `MAX_SEARCH_DEBOUNCE_MS`.
    #[must_use]
    pub fn search_debounce_ms(&self) -> u64 {
        self.search_debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
            .min(MAX_SEARCH_DEBOUNCE_MS)
    }
}

/// Download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DownloadsConfig {
    /// Target directory. Falls back to the platform downloads folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub downloads: DownloadsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay_threshold() -> Option<f32> {
    Some(DEFAULT_AUTOPLAY_THRESHOLD)
}

fn default_search_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config and, when the file exists but cannot be read, the
/// i18n key of a warning to show. The defaults are used in that case.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "config unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                default_filter: Some("video".to_string()),
                autoplay_threshold: Some(0.75),
                search_debounce_ms: Some(150),
            },
            downloads: DownloadsConfig {
                directory: Some(PathBuf::from("/srv/media")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.gallery, GalleryConfig::default());
        assert_eq!(loaded.downloads.directory, None);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn unreadable_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_the_directory_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join(CONFIG_FILE));
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.autoplay_threshold, Some(DEFAULT_AUTOPLAY_THRESHOLD));
        assert_eq!(config.gallery.search_debounce_ms, Some(0));
        assert_eq!(config.gallery.default_filter(), None);
    }

    #[test]
    fn gallery_values_are_clamped() {
        let gallery = GalleryConfig {
            default_filter: Some(" Premium ".to_string()),
            autoplay_threshold: Some(3.0),
            search_debounce_ms: Some(60_000),
        };
        assert_eq!(gallery.default_filter(), Some(FilterCategory::Premium));
        assert_eq!(gallery.autoplay_threshold(), MAX_AUTOPLAY_THRESHOLD);
        assert_eq!(gallery.search_debounce_ms(), MAX_SEARCH_DEBOUNCE_MS);

        let gallery = GalleryConfig {
            default_filter: Some("audio".to_string()),
            autoplay_threshold: Some(f32::NAN),
            search_debounce_ms: None,
        };
        assert_eq!(gallery.default_filter(), None);
        assert_eq!(gallery.autoplay_threshold(), DEFAULT_AUTOPLAY_THRESHOLD);
        assert_eq!(gallery.search_debounce_ms(), DEFAULT_SEARCH_DEBOUNCE_MS);
    }
}
