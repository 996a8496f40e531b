// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window resizes are routed from native events; everything else is
//! handled by the widgets themselves.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window resizes so the grid viewport estimate follows the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
