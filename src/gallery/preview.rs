// SPDX-License-Identifier: MPL-2.0
//! Preview modal state machine.
//!
//! ```text
//! Closed ──open(image)──▶ ShowingImage(r)
//! Closed ──open(video)──▶ PlayingVideo(r)
//! ShowingImage | PlayingVideo ──open(r2)──▶ retarget, no intermediate close
//! ShowingImage | PlayingVideo ──close────▶ Closed
//! ```
//!
//! The modal video source is a scoped resource: it is attached on entry to
//! `PlayingVideo` and released (pause, then detach) on every exit, before any
//! new target is activated. Entering `ShowingImage` releases it regardless of
//! the previous state.

use crate::domain::media::{ItemId, MediaRecord};

/// Title shown when the item has none.
pub const UNTITLED: &str = "Untitled";
/// Price shown when the item carries no price annotation.
pub const FREE_PRICE: &str = "Free";

/// Which record, if any, the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Closed,
    ShowingImage(ItemId),
    PlayingVideo(ItemId),
}

impl PreviewState {
    /// Record currently active in the modal.
    #[must_use]
    pub fn active(self) -> Option<ItemId> {
        match self {
            Self::Closed => None,
            Self::ShowingImage(id) | Self::PlayingVideo(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Element of the modal hit by a pointer activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The background layer itself.
    Backdrop,
    /// Anything inside the modal's content panel.
    Content,
}

/// Commands for the modal's elements, applied in order by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCommand {
    OpenModal,
    CloseModal,
    SetTitle(String),
    SetPrice(String),
    ShowImage(String),
    HideImage,
    LoadVideo(String),
    ShowVideo,
    HideVideo,
    PlayVideo,
    PauseVideo,
    DetachVideo,
}

#[derive(Debug, Clone, Default)]
pub struct Preview {
    state: PreviewState,
    attached_video: Option<String>,
}

impl Preview {
    #[must_use]
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Video source currently attached to the modal player.
    #[must_use]
    pub fn attached_video(&self) -> Option<&str> {
        self.attached_video.as_deref()
    }

    /// Opens (or retargets) the modal on `record`.
    pub fn open(&mut self, record: &MediaRecord) -> Vec<PreviewCommand> {
        let mut commands = Vec::new();
        let playable = record.video_source().filter(|_| record.is_video());

        if matches!(self.state, PreviewState::PlayingVideo(_)) || playable.is_none() {
            self.release_video(&mut commands);
        }

        let title = if record.title().is_empty() {
            UNTITLED
        } else {
            record.title()
        };
        commands.push(PreviewCommand::SetTitle(title.to_string()));
        commands.push(PreviewCommand::SetPrice(
            record.price().unwrap_or(FREE_PRICE).to_string(),
        ));

        let next = if record.is_video() {
            match playable {
                Some(source) => {
                    commands.push(PreviewCommand::LoadVideo(source.to_string()));
                    commands.push(PreviewCommand::ShowVideo);
                    commands.push(PreviewCommand::HideImage);
                    commands.push(PreviewCommand::PlayVideo);
                    self.attached_video = Some(source.to_string());
                }
                None => {
                    commands.push(PreviewCommand::HideVideo);
                    commands.push(image_command(record.fallback_image()));
                }
            }
            PreviewState::PlayingVideo(record.id())
        } else {
            commands.push(PreviewCommand::HideVideo);
            commands.push(image_command(record.image_source()));
            PreviewState::ShowingImage(record.id())
        };

        commands.push(PreviewCommand::OpenModal);
        tracing::debug!(from = ?self.state, to = ?next, "preview transition");
        self.state = next;
        commands
    }

    /// Closes the modal. Closing a closed modal does nothing.
    pub fn close(&mut self) -> Vec<PreviewCommand> {
        if !self.state.is_open() {
            return Vec::new();
        }
        let mut commands = Vec::new();
        self.release_video(&mut commands);
        commands.push(PreviewCommand::CloseModal);
        tracing::debug!(from = ?self.state, "preview closed");
        self.state = PreviewState::Closed;
        commands
    }

    /// Handles a pointer activation on the open modal.
    ///
    /// Only a hit on the backdrop itself closes; hits inside the content
    /// panel leave the state unchanged.
    pub fn pointer(&mut self, target: HitTarget) -> Vec<PreviewCommand> {
        match target {
            HitTarget::Backdrop => self.close(),
            HitTarget::Content => Vec::new(),
        }
    }

    fn release_video(&mut self, commands: &mut Vec<PreviewCommand>) {
        commands.push(PreviewCommand::PauseVideo);
        commands.push(PreviewCommand::DetachVideo);
        self.attached_video = None;
    }
}

fn image_command(source: Option<&str>) -> PreviewCommand {
    source.map_or(PreviewCommand::HideImage, |src| {
        PreviewCommand::ShowImage(src.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaType, RecordDraft};

    fn video(id: usize, source: Option<&str>) -> MediaRecord {
        MediaRecord::from_draft(
            ItemId::new(id),
            RecordDraft {
                title: format!("Clip {id}"),
                media_type: MediaType::Video,
                video_source: source.map(str::to_string),
                poster: Some(format!("poster-{id}.jpg")),
                price: Some("$9".into()),
                ..RecordDraft::default()
            },
        )
    }

    fn image(id: usize) -> MediaRecord {
        MediaRecord::from_draft(
            ItemId::new(id),
            RecordDraft {
                title: format!("Photo {id}"),
                image_source: Some(format!("photo-{id}.jpg")),
                ..RecordDraft::default()
            },
        )
    }

    fn position(commands: &[PreviewCommand], wanted: &PreviewCommand) -> usize {
        commands
            .iter()
            .position(|c| c == wanted)
            .unwrap_or_else(|| panic!("missing {wanted:?} in {commands:?}"))
    }

    #[test]
    fn opening_a_video_loads_and_plays_it() {
        let mut preview = Preview::default();
        let commands = preview.open(&video(0, Some("clip.mp4")));

        assert_eq!(preview.state(), PreviewState::PlayingVideo(ItemId::new(0)));
        assert_eq!(preview.attached_video(), Some("clip.mp4"));
        assert!(
            position(&commands, &PreviewCommand::LoadVideo("clip.mp4".into()))
                < position(&commands, &PreviewCommand::PlayVideo)
        );
        assert!(commands.contains(&PreviewCommand::HideImage));
        assert!(commands.contains(&PreviewCommand::SetPrice("$9".into())));
        assert_eq!(commands.last(), Some(&PreviewCommand::OpenModal));
    }

    #[test]
    fn image_after_video_detaches_the_source_first() {
        let mut preview = Preview::default();
        preview.open(&video(0, Some("clip.mp4")));

        let commands = preview.open(&image(1));

        assert_eq!(preview.state(), PreviewState::ShowingImage(ItemId::new(1)));
        assert_eq!(preview.attached_video(), None);
        let pause = position(&commands, &PreviewCommand::PauseVideo);
        let detach = position(&commands, &PreviewCommand::DetachVideo);
        let show = position(&commands, &PreviewCommand::ShowImage("photo-1.jpg".into()));
        assert!(pause < detach && detach < show);
        assert!(!commands.contains(&PreviewCommand::CloseModal));
    }

    #[test]
    fn video_to_video_releases_before_loading() {
        let mut preview = Preview::default();
        preview.open(&video(0, Some("a.mp4")));

        let commands = preview.open(&video(1, Some("b.mp4")));

        assert_eq!(preview.attached_video(), Some("b.mp4"));
        assert!(
            position(&commands, &PreviewCommand::DetachVideo)
                < position(&commands, &PreviewCommand::LoadVideo("b.mp4".into()))
        );
    }

    #[test]
    fn image_to_image_still_detaches_video() {
        let mut preview = Preview::default();
        preview.open(&image(0));
        let commands = preview.open(&image(1));
        assert!(commands.contains(&PreviewCommand::PauseVideo));
        assert!(commands.contains(&PreviewCommand::DetachVideo));
        assert!(commands.contains(&PreviewCommand::HideVideo));
    }

    #[test]
    fn video_without_source_falls_back_to_poster() {
        let mut preview = Preview::default();
        let commands = preview.open(&video(2, None));

        assert_eq!(preview.state(), PreviewState::PlayingVideo(ItemId::new(2)));
        assert_eq!(preview.attached_video(), None);
        assert!(commands.contains(&PreviewCommand::ShowImage("poster-2.jpg".into())));
        assert!(!commands.contains(&PreviewCommand::PlayVideo));
    }

    #[test]
    fn missing_title_and_price_use_fallbacks() {
        let mut preview = Preview::default();
        let bare = MediaRecord::from_draft(ItemId::new(0), RecordDraft::default());
        let commands = preview.open(&bare);

        assert!(commands.contains(&PreviewCommand::SetTitle(UNTITLED.into())));
        assert!(commands.contains(&PreviewCommand::SetPrice(FREE_PRICE.into())));
        assert!(commands.contains(&PreviewCommand::HideImage));
    }

    #[test]
    fn close_releases_video_and_resets() {
        let mut preview = Preview::default();
        preview.open(&video(0, Some("clip.mp4")));

        let commands = preview.close();

        assert_eq!(preview.state(), PreviewState::Closed);
        assert_eq!(preview.attached_video(), None);
        assert_eq!(
            commands,
            [
                PreviewCommand::PauseVideo,
                PreviewCommand::DetachVideo,
                PreviewCommand::CloseModal
            ]
        );
        assert!(preview.close().is_empty());
    }

    #[test]
    fn only_backdrop_hits_close() {
        let mut preview = Preview::default();
        preview.open(&image(0));

        assert!(preview.pointer(HitTarget::Content).is_empty());
        assert_eq!(preview.state(), PreviewState::ShowingImage(ItemId::new(0)));

        preview.pointer(HitTarget::Backdrop);
        assert_eq!(preview.state(), PreviewState::Closed);
    }
}
