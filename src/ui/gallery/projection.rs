// SPDX-License-Identifier: MPL-2.0
//! Rendered page state.
//!
//! The controller never hands widgets its own state: the view keeps this
//! projection and mutates it only by applying the commands it receives, in
//! order. What is drawn is therefore exactly what the commands said.

use crate::domain::media::{FilterCategory, ItemId};
use crate::gallery::{Command, PreviewCommand};

/// Element state of the preview modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalProjection {
    pub open: bool,
    pub title: String,
    pub price: String,
    pub image_src: Option<String>,
    pub image_visible: bool,
    /// Source attached to the modal video element.
    pub video_src: Option<String>,
    pub video_visible: bool,
    pub video_playing: bool,
}

impl ModalProjection {
    fn apply(&mut self, command: &PreviewCommand) {
        match command {
            PreviewCommand::OpenModal => self.open = true,
            PreviewCommand::CloseModal => self.open = false,
            PreviewCommand::SetTitle(title) => self.title.clone_from(title),
            PreviewCommand::SetPrice(price) => self.price.clone_from(price),
            PreviewCommand::ShowImage(src) => {
                self.image_src = Some(src.clone());
                self.image_visible = true;
            }
            PreviewCommand::HideImage => self.image_visible = false,
            PreviewCommand::LoadVideo(src) => self.video_src = Some(src.clone()),
            PreviewCommand::ShowVideo => self.video_visible = true,
            PreviewCommand::HideVideo => self.video_visible = false,
            PreviewCommand::PlayVideo => self.video_playing = self.video_src.is_some(),
            PreviewCommand::PauseVideo => self.video_playing = false,
            PreviewCommand::DetachVideo => {
                self.video_playing = false;
                self.video_src = None;
            }
        }
    }

    /// Image to draw, if the image element is shown.
    #[must_use]
    pub fn shown_image(&self) -> Option<&str> {
        self.image_visible
            .then_some(self.image_src.as_deref())
            .flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageProjection {
    item_visible: Vec<bool>,
    no_results_visible: bool,
    active_filter: FilterCategory,
    modal: ModalProjection,
}

impl PageProjection {
    /// Starts with every one of `len` items shown, like the unscripted page.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            item_visible: vec![true; len],
            ..Self::default()
        }
    }

    /// Applies a view command. Download steps are not view state and are
    /// ignored here.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::SetItemVisible { id, visible } => {
                if let Some(slot) = self.item_visible.get_mut(id.index()) {
                    *slot = *visible;
                }
            }
            Command::SetNoResultsVisible(visible) => self.no_results_visible = *visible,
            Command::SetActiveFilter(category) => self.active_filter = *category,
            Command::Preview(preview) => self.modal.apply(preview),
            Command::Download(_) => {}
        }
    }

    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    #[must_use]
    pub fn is_item_visible(&self, id: ItemId) -> bool {
        self.item_visible.get(id.index()).copied().unwrap_or(false)
    }

    /// Items currently shown, in page order.
    pub fn visible_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.item_visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(index, _)| ItemId::new(index))
    }

    #[must_use]
    pub fn no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    #[must_use]
    pub fn active_filter(&self) -> FilterCategory {
        self.active_filter
    }

    #[must_use]
    pub fn modal(&self) -> &ModalProjection {
        &self.modal
    }
}
