// SPDX-License-Identifier: MPL-2.0
//! Free/paid download flow.
//!
//! - no download target: blocking notice, nothing else happens
//! - free item: the transfer starts directly
//! - paid item: a payment confirmation comes first; declining ends the flow
//!   with a notice and no transfer
//!
//! [`DownloadFlow`] is step-wise so the shell can put an asynchronous dialog
//! between [`DownloadFlow::request`] and [`DownloadFlow::resolve_payment`].
//! [`run_download`] drives the same steps synchronously through the ports.

use crate::application::port::{Downloader, PaymentPrompt};
use crate::domain::media::MediaRecord;

/// Title used in the payment prompt when the item has none.
pub const FALLBACK_PAYMENT_TITLE: &str = "this item";

/// Next thing the shell has to do for a download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStep {
    /// The item has no download target. Show a blocking notice.
    Unavailable,
    /// The preview download control was used with nothing previewed.
    NothingSelected,
    /// Ask for a simulated payment before downloading `url`.
    ConfirmPayment { title: String, url: String },
    /// Start the transfer.
    Start { url: String },
    /// The visitor declined the payment. Show a notice.
    Cancelled,
}

/// Stateless decision logic of the download flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadFlow;

impl DownloadFlow {
    /// First step for a record's download control.
    #[must_use]
    pub fn request(record: &MediaRecord) -> DownloadStep {
        let Some(url) = record.download_url() else {
            tracing::info!(id = %record.id(), "download unavailable");
            return DownloadStep::Unavailable;
        };

        if record.is_free() {
            DownloadStep::Start {
                url: url.to_string(),
            }
        } else {
            let title = if record.title().is_empty() {
                FALLBACK_PAYMENT_TITLE
            } else {
                record.title()
            };
            DownloadStep::ConfirmPayment {
                title: title.to_string(),
                url: url.to_string(),
            }
        }
    }

    /// First step for the preview's download control.
    #[must_use]
    pub fn request_preview(record: Option<&MediaRecord>) -> DownloadStep {
        record.map_or(DownloadStep::NothingSelected, Self::request)
    }

    /// Step following the payment prompt.
    #[must_use]
    pub fn resolve_payment(accepted: bool, url: String) -> DownloadStep {
        if accepted {
            DownloadStep::Start { url }
        } else {
            tracing::info!("payment declined");
            DownloadStep::Cancelled
        }
    }
}

/// How a synchronously driven download request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Started(String),
    Unavailable,
    NothingSelected,
    Cancelled,
}

/// Drives the whole flow for one request through the ports.
///
/// The prompt is consulted at most once and always before the downloader.
pub fn run_download(
    record: Option<&MediaRecord>,
    downloader: &mut impl Downloader,
    prompt: &mut impl PaymentPrompt,
) -> DownloadOutcome {
    let mut step = DownloadFlow::request_preview(record);
    loop {
        step = match step {
            DownloadStep::Unavailable => return DownloadOutcome::Unavailable,
            DownloadStep::NothingSelected => return DownloadOutcome::NothingSelected,
            DownloadStep::Cancelled => return DownloadOutcome::Cancelled,
            DownloadStep::Start { url } => {
                downloader.trigger(&url);
                return DownloadOutcome::Started(url);
            }
            DownloadStep::ConfirmPayment { title, url } => {
                let accepted = prompt.confirm(&title);
                DownloadFlow::resolve_payment(accepted, url)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{ItemId, RecordDraft};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Downloader for Recorder {
        fn trigger(&mut self, url: &str) {
            self.events.push(format!("download {url}"));
        }
    }

    struct Prompt<'a> {
        answer: bool,
        events: &'a mut Vec<String>,
    }

    impl PaymentPrompt for Prompt<'_> {
        fn confirm(&mut self, title: &str) -> bool {
            self.events.push(format!("confirm {title}"));
            self.answer
        }
    }

    fn record(free: bool, url: Option<&str>, title: &str) -> MediaRecord {
        MediaRecord::from_draft(
            ItemId::new(0),
            RecordDraft {
                title: title.into(),
                free,
                download_url: url.map(str::to_string),
                ..RecordDraft::default()
            },
        )
    }

    #[test]
    fn free_item_downloads_without_confirmation() {
        let item = record(true, Some("files/a.jpg"), "A");
        let mut downloader = Recorder::default();
        let mut prompt_events = Vec::new();
        let mut prompt = Prompt {
            answer: false,
            events: &mut prompt_events,
        };

        let outcome = run_download(Some(&item), &mut downloader, &mut prompt);

        assert_eq!(outcome, DownloadOutcome::Started("files/a.jpg".into()));
        assert_eq!(downloader.events, ["download files/a.jpg"]);
        assert!(prompt_events.is_empty());
    }

    #[test]
    fn paid_item_confirms_before_download() {
        struct Shared<'a>(&'a mut Vec<String>);
        impl Downloader for Shared<'_> {
            fn trigger(&mut self, url: &str) {
                self.0.push(format!("download {url}"));
            }
        }

        let item = record(false, Some("files/b.mp4"), "Waves");
        let mut events = Vec::new();
        let mut prompt_events = Vec::new();
        let outcome = {
            let mut downloader = Shared(&mut events);
            let mut prompt = |title: &str| {
                prompt_events.push(format!("confirm {title}"));
                true
            };
            run_download(Some(&item), &mut downloader, &mut prompt)
        };

        assert_eq!(outcome, DownloadOutcome::Started("files/b.mp4".into()));
        assert_eq!(prompt_events, ["confirm Waves"]);
        assert_eq!(events, ["download files/b.mp4"]);
    }

    #[test]
    fn declined_payment_never_downloads() {
        let item = record(false, Some("files/c.jpg"), "");
        let mut downloader = Recorder::default();
        let mut prompt_events = Vec::new();
        let mut prompt = Prompt {
            answer: false,
            events: &mut prompt_events,
        };

        let outcome = run_download(Some(&item), &mut downloader, &mut prompt);

        assert_eq!(outcome, DownloadOutcome::Cancelled);
        assert!(downloader.events.is_empty());
        assert_eq!(prompt_events, [format!("confirm {FALLBACK_PAYMENT_TITLE}")]);
    }

    #[test]
    fn missing_target_has_no_side_effects() {
        let item = record(true, None, "Nothing");
        let mut downloader = Recorder::default();
        let mut prompt_events = Vec::new();
        let mut prompt = Prompt {
            answer: true,
            events: &mut prompt_events,
        };

        assert_eq!(
            run_download(Some(&item), &mut downloader, &mut prompt),
            DownloadOutcome::Unavailable
        );
        assert!(downloader.events.is_empty());
        assert!(prompt_events.is_empty());
    }

    #[test]
    fn preview_without_selection_reports_it() {
        assert_eq!(DownloadFlow::request_preview(None), DownloadStep::NothingSelected);
    }

    #[test]
    fn resolve_payment_maps_answer() {
        assert_eq!(
            DownloadFlow::resolve_payment(true, "u".into()),
            DownloadStep::Start { url: "u".into() }
        );
        assert_eq!(
            DownloadFlow::resolve_payment(false, "u".into()),
            DownloadStep::Cancelled
        );
    }
}
