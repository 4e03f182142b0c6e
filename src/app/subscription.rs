// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only file drops are routed; keyboard and mouse input stay with the
//! widgets.

use super::Message;
use iced::{event, window, Subscription};

/// Turns files dropped on the window into [`Message::FileDropped`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
