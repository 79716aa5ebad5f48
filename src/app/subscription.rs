// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resize events feed the responsive grid's column count; a periodic
//! tick drives the spinner animation and notification auto-dismiss. The tick
//! is only active while something actually needs it, so an idle gallery
//! produces no wakeups.

use super::Message;
use iced::{event, time, Subscription};

/// Routes window resize events to the grid layout.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for spinner animation and
/// notification auto-dismiss.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
