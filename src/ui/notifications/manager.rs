// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifetime handling.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of expiry timers.
    Tick(Instant),
}

/// Ordered notification queue. The first [`MAX_VISIBLE`] entries are on
/// screen; the remainder wait their turn in arrival order.
#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.entries.push_back(notification);
    }

    /// Removes a notification. Returns `true` if it was present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.retain_promoting(|n| n.id() != id, Instant::now());
        self.entries.len() != before
    }

    /// Drops visible notifications whose lifetime elapsed.
    ///
    /// Queued entries start aging only once they are shown, so their
    /// creation time is reset on promotion.
    pub fn tick(&mut self, now: Instant) {
        let visible = self.visible_count();
        let mut index = 0;
        let mut seen = 0;
        while seen < visible {
            if self.entries[index].is_expired(now) {
                self.entries.remove(index);
            } else {
                index += 1;
            }
            seen += 1;
        }
        self.restart_promoted(index, now);
    }

    /// Drops every notification whose key starts with `prefix`.
    pub fn clear_prefixed(&mut self, prefix: &str) {
        self.retain_promoting(|n| !n.key().starts_with(prefix), Instant::now());
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    /// Whether anything is on screen or waiting. The App only subscribes to
    /// ticks while this holds.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Keeps the entries matching `keep`. Entries moved up from the queue
    /// start their lifetime at `now`.
    fn retain_promoting(&mut self, mut keep: impl FnMut(&Notification) -> bool, now: Instant) {
        let shown = self.visible_count();
        let mut index = 0;
        let mut still_shown = 0;
        self.entries.retain(|n| {
            let kept = keep(n);
            if kept && index < shown {
                still_shown += 1;
            }
            index += 1;
            kept
        });
        self.restart_promoted(still_shown, now);
    }

    fn restart_promoted(&mut self, from: usize, now: Instant) {
        let visible = self.visible_count();
        for entry in self.entries.range_mut(from..visible) {
            entry.restart(now);
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
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::success(format!("n-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.entries.len(), MAX_VISIBLE + 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("n-{i}")));
        }

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.entries.len(), MAX_VISIBLE);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn tick_expires_success_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-image-added"));
        manager.push(Notification::error("error-decode-corrupted"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));

        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["error-decode-corrupted"]);
    }

    #[test]
    fn promoted_entries_get_a_fresh_lifetime() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("n-{i}")));
        }
        manager.push(Notification::success("late"));

        let later = Instant::now() + Duration::from_secs(4);
        manager.tick(later);

        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["late"]);
        manager.tick(later + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clear_prefixed_keeps_other_keys() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-decode-empty"));
        manager.push(Notification::success("notification-text-saved"));
        manager.push(Notification::error("error-decode-io"));

        manager.clear_prefixed("error-decode-");

        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["notification-text-saved"]);
    }

    fn stale_success(key: &str) -> Notification {
        let mut notification = Notification::success(key);
        if let Some(earlier) = Instant::now().checked_sub(Duration::from_secs(10)) {
            notification.restart(earlier);
        }
        notification
    }

    #[test]
    fn dismiss_gives_promoted_entry_a_fresh_lifetime() {
        let mut manager = Manager::new();
        let first = Notification::error("e1");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::error("e2"));
        manager.push(Notification::error("e3"));
        manager.push(stale_success("queued"));

        manager.dismiss(first_id);
        manager.tick(Instant::now() + Duration::from_secs(1));

        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["e2", "e3", "queued"]);
    }

    #[test]
    fn clearing_gives_promoted_entry_a_fresh_lifetime() {
        let mut manager = Manager::new();
        manager.push(Notification::error("error-decode-empty"));
        manager.push(Notification::error("e2"));
        manager.push(Notification::error("e3"));
        manager.push(stale_success("queued"));

        manager.clear_prefixed("error-decode-");
        manager.tick(Instant::now() + Duration::from_secs(1));

        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, vec!["e2", "e3", "queued"]);
    }

    #[test]
    fn removing_a_visible_entry_keeps_shown_lifetimes() {
        let mut manager = Manager::new();
        let first = Notification::error("e1");
        let first_id = first.id();
        manager.push(first);
        manager.push(stale_success("shown"));

        manager.dismiss(first_id);
        manager.tick(Instant::now());

        assert_eq!(manager.visible_count(), 0);
    }
}
