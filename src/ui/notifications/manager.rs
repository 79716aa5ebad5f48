// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and manages
//! auto-dismiss timers.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Pushes a notification unless one with the same text is already
    /// visible or queued.
    ///
    /// Used for notifications that can fire repeatedly in quick succession
    /// (such as the initial-load success banner) where stacking duplicates
    /// would only add noise.
    pub fn push_unique(&mut self, notification: Notification) {
        let duplicate = self
            .visible
            .iter()
            .chain(self.queue.iter())
            .any(|existing| existing.message() == notification.message());

        if !duplicate {
            self.push(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
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

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) to handle
    /// auto-dismiss.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes notifications from the queue to visible while there's space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
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
    fn push_unique_drops_duplicate_text() {
        let mut manager = Manager::new();
        manager.push_unique(Notification::success("Saved images downloaded"));
        manager.push_unique(Notification::success("Saved images downloaded"));

        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn push_unique_allows_distinct_text() {
        let mut manager = Manager::new();
        manager.push_unique(Notification::success("one"));
        manager.push_unique(Notification::success("two"));

        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn dismiss_removes_from_visible() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert_eq!(manager.visible_count(), 1);

        let removed = manager.dismiss(id);
        assert!(removed);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let mut first_id = None;
        for i in 0..MAX_VISIBLE {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }

        manager.push(Notification::success("queued"));
        assert_eq!(manager.queued_count(), 1);

        manager.dismiss(first_id.unwrap());

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();

        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("just happened"));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }
}
