// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback: download progress and
//! failures, declined payments, demo sign-in notices.
//!
//! Blocking notices (no download target, nothing previewed) are native
//! message dialogs instead; see [`crate::infrastructure::dialog`].
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering the visible notifications
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-download-cancelled"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
