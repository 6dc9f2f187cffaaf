// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Iced owns both listeners and tears them down when the subscription is
//! dropped, so nothing here keeps handles around.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Follows the OS light/dark preference.
pub fn create_system_theme_subscription() -> Subscription<Message> {
    iced::system::theme_changes().map(Message::SystemThemeChanged)
}

/// Alt+Left / Alt+Right walk the navigation history.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Widgets with focus (e.g. text selection) keep their keys
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                history_shortcut(&key, modifiers)
            }
            _ => None,
        }
    })
}

fn history_shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if !modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::HistoryBack),
        Key::Named(Named::ArrowRight) => Some(Message::HistoryForward),
        _ => None,
    }
}
