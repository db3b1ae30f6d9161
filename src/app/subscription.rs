// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only listened to while the lightbox is open; the grid
//! and the filter bar are driven by their widgets alone.

use super::Message;
use crate::application::dispatch::{GalleryEvent, GalleryKey};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Maps a key to the lightbox key it stands for.
#[must_use]
pub fn gallery_key(key: &Key) -> Option<GalleryKey> {
    match key {
        Key::Named(Named::Escape) => Some(GalleryKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(GalleryKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(GalleryKey::ArrowRight),
        _ => None,
    }
}

/// Routes uncaptured key presses to the gallery while the lightbox is open.
pub fn create_keyboard_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        // Widgets (e.g. the search input) keep the keys they handled.
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => gallery_key(&key)
                .map(|key| Message::Gallery(GalleryEvent::KeyPressed(key))),
            _ => None,
        }
    })
}

/// Periodic tick for notification auto-dismiss, only while toasts are up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_keys_are_mapped() {
        assert_eq!(
            gallery_key(&Key::Named(Named::Escape)),
            Some(GalleryKey::Escape)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowLeft)),
            Some(GalleryKey::ArrowLeft)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowRight)),
            Some(GalleryKey::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_key(&Key::Named(Named::Enter)), None);
        assert_eq!(gallery_key(&Key::Character("a".into())), None);
    }
}
