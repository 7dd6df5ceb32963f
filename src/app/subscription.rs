// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window-level file drag events and close requests are routed here. Paste
//! and Escape handling lives in the components, which only subscribe while
//! they need the keyboard.

use super::{Message, Slot};
use crate::ui::image_upload;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Window events: file hover/drop, resizes and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Periodic tick driving toast expiry, only while toasts exist.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// A slot's own listener, tagged with the slot so two identical listeners
/// stay distinct.
pub fn create_slot_subscription(slot: Slot, state: &image_upload::State) -> Subscription<Message> {
    state
        .subscription()
        .with(slot)
        .map(|(slot, message)| Message::Upload(slot, message))
}
