// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::DownloadError;
use crate::infrastructure::DownloadReport;
use crate::ui::gallery;
use crate::ui::login_panel;
use crate::ui::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Login(login_panel::Message),
    Notification(notifications::NotificationMessage),
    /// A delayed search query is due. Stale generations are dropped.
    SearchDebounced {
        generation: u64,
        query: String,
    },
    /// The payment prompt for `url` was answered.
    PaymentAnswered {
        accepted: bool,
        url: String,
    },
    /// A blocking notice was dismissed.
    NoticeClosed,
    DownloadFinished(Result<DownloadReport, DownloadError>),
    /// Result of fetching a remote thumbnail or preview image.
    ImageFetched {
        src: String,
        result: Result<Vec<u8>, DownloadError>,
    },
    WindowResized(Size),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery page to open instead of the bundled demo page.
    pub page_path: Option<String>,
    /// Optional data directory override (logs, default downloads).
    /// Takes precedence over `ICED_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
