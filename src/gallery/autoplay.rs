// SPDX-License-Identifier: MPL-2.0
//! Grid video autoplay.
//!
//! Video cards play while enough of them is inside the scroll viewport and
//! pause otherwise. The observer only tracks which cards it told to play;
//! ratios are measured by the view.

use crate::domain::media::ItemId;
use std::collections::HashSet;

/// Play/pause instruction for one grid card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayCommand {
    Play(ItemId),
    Pause(ItemId),
}

#[derive(Debug, Clone)]
pub struct AutoplayObserver {
    threshold: f32,
    playing: HashSet<ItemId>,
}

impl AutoplayObserver {
    /// Creates an observer. The threshold is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            crate::app::config::DEFAULT_AUTOPLAY_THRESHOLD
        };
        Self {
            threshold,
            playing: HashSet::new(),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn is_playing(&self, id: ItemId) -> bool {
        self.playing.contains(&id)
    }

    /// Reports the visible ratio of a card. Emits a command only when the
    /// card crosses the threshold.
    pub fn observe(&mut self, id: ItemId, ratio: f32) -> Option<AutoplayCommand> {
        let intersecting = ratio > 0.0 && ratio >= self.threshold;
        match (intersecting, self.playing.contains(&id)) {
            (true, false) => {
                self.playing.insert(id);
                Some(AutoplayCommand::Play(id))
            }
            (false, true) => {
                self.playing.remove(&id);
                Some(AutoplayCommand::Pause(id))
            }
            _ => None,
        }
    }

    /// Pauses every playing card, e.g. when the grid is covered by the modal.
    pub fn pause_all(&mut self) -> Vec<AutoplayCommand> {
        let mut paused: Vec<ItemId> = self.playing.drain().collect();
        paused.sort();
        paused.into_iter().map(AutoplayCommand::Pause).collect()
    }
}

impl Default for AutoplayObserver {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_AUTOPLAY_THRESHOLD)
    }
}
