// SPDX-License-Identifier: MPL-2.0
//! Gallery controller.
//!
//! [`Gallery`] owns every piece of view state explicitly: the catalog, the
//! raw search text, the filter selection, the last visibility result and the
//! preview modal. Input events go through [`Gallery::handle`], which mutates
//! that state synchronously and returns the [`Command`]s the view has to
//! apply, in order.
//!
//! Visibility is recomputed inline in the handler that changed the query or
//! the filter, so it always reflects the latest pair.
//!
//! # Example
//!
//! ```
//! use iced_gallery::catalog::Catalog;
//! use iced_gallery::domain::media::{FilterCategory, ItemId, RecordDraft};
//! use iced_gallery::gallery::{Command, Gallery, Message};
//!
//! let catalog = Catalog::from_drafts([RecordDraft {
//!     title: "Sunset".into(),
//!     tags: "nature, sky".into(),
//!     ..RecordDraft::default()
//! }]);
//! let mut gallery = Gallery::new(catalog, Vec::new(), FilterCategory::All);
//!
//! let commands = gallery.handle(Message::SearchChanged("ocean".into()));
//! assert!(commands.contains(&Command::SetItemVisible { id: ItemId::new(0), visible: false }));
//! assert!(commands.contains(&Command::SetNoResultsVisible(true)));
//! ```

pub mod autoplay;
pub mod filter_selection;
pub mod preview;
pub mod visibility;

pub use autoplay::{AutoplayCommand, AutoplayObserver};
pub use filter_selection::FilterSelection;
pub use preview::{HitTarget, Preview, PreviewCommand, PreviewState};
pub use visibility::{recompute, Visibility};

use crate::application::download::{DownloadFlow, DownloadStep};
use crate::catalog::Catalog;
use crate::domain::media::{FilterCategory, ItemId, MediaRecord};

/// Where a download request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadSource {
    /// A grid card's own download control.
    Item(ItemId),
    /// The preview modal's download control.
    Preview,
}

/// Input events routed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SearchChanged(String),
    FilterSelected(FilterCategory),
    ItemActivated(ItemId),
    ClosePreview,
    PointerActivated(HitTarget),
    DownloadRequested(DownloadSource),
}

/// Effects for the view, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetItemVisible { id: ItemId, visible: bool },
    SetNoResultsVisible(bool),
    SetActiveFilter(FilterCategory),
    Preview(PreviewCommand),
    Download(DownloadStep),
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    catalog: Catalog,
    query: String,
    filter: FilterSelection,
    visibility: Visibility,
    preview: Preview,
}

impl Gallery {
    /// Creates the controller and computes the initial visibility.
    #[must_use]
    pub fn new(catalog: Catalog, filters: Vec<FilterCategory>, initial: FilterCategory) -> Self {
        let filter = FilterSelection::new(filters, initial);
        let visibility = recompute(&catalog, "", filter.active());
        Self {
            catalog,
            query: String::new(),
            filter,
            visibility,
            preview: Preview::default(),
        }
    }

    /// Recomputes visibility and returns the full projection for a fresh view.
    pub fn refresh(&mut self) -> Vec<Command> {
        let mut commands = vec![Command::SetActiveFilter(self.filter.active())];
        commands.extend(self.recompute());
        commands
    }

    pub fn handle(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::SearchChanged(query) => {
                self.query = query;
                self.recompute()
            }
            Message::FilterSelected(category) => {
                self.filter.select(category);
                let mut commands = vec![Command::SetActiveFilter(category)];
                commands.extend(self.recompute());
                commands
            }
            Message::ItemActivated(id) => match self.catalog.get(id) {
                Some(record) => wrap_preview(self.preview.open(record)),
                None => {
                    tracing::warn!(%id, "activation for unknown item ignored");
                    Vec::new()
                }
            },
            Message::ClosePreview => wrap_preview(self.preview.close()),
            Message::PointerActivated(target) => wrap_preview(self.preview.pointer(target)),
            Message::DownloadRequested(source) => {
                let step = match source {
                    DownloadSource::Item(id) => self
                        .catalog
                        .get(id)
                        .map_or(DownloadStep::Unavailable, DownloadFlow::request),
                    DownloadSource::Preview => DownloadFlow::request_preview(self.previewed()),
                };
                vec![Command::Download(step)]
            }
        }
    }

    fn recompute(&mut self) -> Vec<Command> {
        self.visibility = recompute(&self.catalog, &self.query, self.filter.active());
        let mut commands: Vec<Command> = self
            .catalog
            .iter()
            .map(|record| Command::SetItemVisible {
                id: record.id(),
                visible: self.visibility.is_visible(record.id()),
            })
            .collect();
        commands.push(Command::SetNoResultsVisible(
            self.visibility.no_results_visible(),
        ));
        commands
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw search text as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    #[must_use]
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Record currently shown in the preview modal.
    #[must_use]
    pub fn previewed(&self) -> Option<&MediaRecord> {
        self.preview
            .state()
            .active()
            .and_then(|id| self.catalog.get(id))
    }
}

fn wrap_preview(commands: Vec<PreviewCommand>) -> Vec<Command> {
    commands.into_iter().map(Command::Preview).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaType, RecordDraft};

    fn gallery() -> Gallery {
        let catalog = Catalog::from_drafts([
            RecordDraft {
                title: "Sunset".into(),
                tags: "nature,sky".into(),
                free: true,
                download_url: Some("files/sunset.jpg".into()),
                image_source: Some("sunset.jpg".into()),
                ..RecordDraft::default()
            },
            RecordDraft {
                title: "Waves".into(),
                tags: "ocean".into(),
                media_type: MediaType::Video,
                premium: true,
                download_url: Some("files/waves.mp4".into()),
                video_source: Some("waves.mp4".into()),
                ..RecordDraft::default()
            },
        ]);
        Gallery::new(catalog, Vec::new(), FilterCategory::All)
    }

    fn visible_flags(commands: &[Command]) -> Vec<bool> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::SetItemVisible { visible, .. } => Some(*visible),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn refresh_projects_every_item() {
        let mut gallery = gallery();
        let commands = gallery.refresh();
        assert_eq!(commands[0], Command::SetActiveFilter(FilterCategory::All));
        assert_eq!(visible_flags(&commands), [true, true]);
        assert_eq!(commands.last(), Some(&Command::SetNoResultsVisible(false)));
    }

    #[test]
    fn search_keeps_raw_text_and_recomputes() {
        let mut gallery = gallery();
        let commands = gallery.handle(Message::SearchChanged("  NATURE ".into()));

        assert_eq!(gallery.query(), "  NATURE ");
        assert_eq!(visible_flags(&commands), [true, false]);
        assert!(commands.contains(&Command::SetNoResultsVisible(false)));
    }

    #[test]
    fn filter_selection_recomputes_even_when_unchanged() {
        let mut gallery = gallery();
        let first = gallery.handle(Message::FilterSelected(FilterCategory::Video));
        let again = gallery.handle(Message::FilterSelected(FilterCategory::Video));

        assert_eq!(first, again);
        assert_eq!(visible_flags(&first), [false, true]);
        assert_eq!(gallery.filter().active(), FilterCategory::Video);
    }

    #[test]
    fn query_and_filter_together_can_empty_the_grid() {
        let mut gallery = gallery();
        gallery.handle(Message::SearchChanged("ocean".into()));
        let commands = gallery.handle(Message::FilterSelected(FilterCategory::Image));

        assert_eq!(visible_flags(&commands), [false, false]);
        assert!(commands.contains(&Command::SetNoResultsVisible(true)));
        assert!(!gallery.visibility().any_visible());
    }

    #[test]
    fn activating_items_drives_preview() {
        let mut gallery = gallery();
        gallery.handle(Message::ItemActivated(ItemId::new(1)));
        assert_eq!(
            gallery.preview().state(),
            PreviewState::PlayingVideo(ItemId::new(1))
        );

        let commands = gallery.handle(Message::ItemActivated(ItemId::new(0)));
        assert_eq!(
            gallery.preview().state(),
            PreviewState::ShowingImage(ItemId::new(0))
        );
        assert!(commands.contains(&Command::Preview(PreviewCommand::DetachVideo)));
        assert_eq!(gallery.preview().attached_video(), None);
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut gallery = gallery();
        assert!(gallery.handle(Message::ItemActivated(ItemId::new(9))).is_empty());
        assert_eq!(gallery.preview().state(), PreviewState::Closed);
    }

    #[test]
    fn preview_download_uses_previewed_record() {
        let mut gallery = gallery();
        assert_eq!(
            gallery.handle(Message::DownloadRequested(DownloadSource::Preview)),
            [Command::Download(DownloadStep::NothingSelected)]
        );

        gallery.handle(Message::ItemActivated(ItemId::new(1)));
        assert_eq!(
            gallery.handle(Message::DownloadRequested(DownloadSource::Preview)),
            [Command::Download(DownloadStep::ConfirmPayment {
                title: "Waves".into(),
                url: "files/waves.mp4".into()
            })]
        );
    }

    #[test]
    fn grid_download_for_free_item_starts_directly() {
        let mut gallery = gallery();
        assert_eq!(
            gallery.handle(Message::DownloadRequested(DownloadSource::Item(ItemId::new(0)))),
            [Command::Download(DownloadStep::Start {
                url: "files/sunset.jpg".into()
            })]
        );
    }

    #[test]
    fn backdrop_click_closes_and_content_click_does_not() {
        let mut gallery = gallery();
        gallery.handle(Message::ItemActivated(ItemId::new(0)));

        assert!(gallery
            .handle(Message::PointerActivated(HitTarget::Content))
            .is_empty());
        assert!(gallery.preview().state().is_open());

        gallery.handle(Message::PointerActivated(HitTarget::Backdrop));
        assert_eq!(gallery.preview().state(), PreviewState::Closed);
        assert!(gallery.previewed().is_none());
    }
}
