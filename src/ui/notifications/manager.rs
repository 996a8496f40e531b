// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: queuing, auto-dismiss timers and manual dismissal.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when `MAX_VISIBLE` are showing.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), args = ?notification.message_args(), "notice");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), args = ?notification.message_args(), "notice");
            }
            Severity::Success | Severity::Info => {}
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every notification whose key starts with `prefix`.
    ///
    /// Used to drop a stale one-time code once a new sign-in step begins.
    pub fn dismiss_with_prefix(&mut self, prefix: &str) {
        let visible_before = self.visible.len();
        self.visible.retain(|n| !n.message_key().starts_with(prefix));
        self.queue.retain(|n| !n.message_key().starts_with(prefix));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    /// Dismisses expired notifications.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "queued"));
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_keeps_errors_and_drops_expired() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-download-error-http"));
        manager.push(Notification::success("notification-download-finished").auto_dismiss(Duration::ZERO));

        manager.handle_message(&Message::Tick);

        assert_eq!(manager.visible_count(), 1);
        assert!(manager
            .visible()
            .all(|n| n.message_key() == "notification-download-error-http"));
    }

    #[test]
    fn dismiss_with_prefix_drops_matching_keys_everywhere() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-login-code-issued"));
        manager.push(Notification::warning("notification-download-cancelled"));
        manager.push(Notification::warning("notification-login-invalid"));
        manager.push(Notification::info("notification-login-gmail"));
        assert_eq!(manager.queued_count(), 1);

        manager.dismiss_with_prefix("notification-login-");

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager
            .visible()
            .all(|n| n.message_key() == "notification-download-cancelled"));
    }
}
