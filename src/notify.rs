//! Toast Notifications
//!
//! Transient messages shown in the corner. Each one removes itself after the
//! configured timeout, or earlier when clicked.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "toast info",
            NotificationLevel::Success => "toast success",
            NotificationLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Sink for user-facing messages
pub trait Notify {
    fn notify(&self, level: NotificationLevel, message: String);
}

/// Ordered list of visible notifications with id allocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Append a notification, returning its id
    pub fn push(&mut self, level: NotificationLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Reactive notification queue, provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms,
        }
    }

    /// Visible notifications, oldest first (tracked)
    pub fn notifications(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Notify for Notifier {
    fn notify(&self, level: NotificationLevel, message: String) {
        log::info!("[toast:{:?}] {}", level, message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(level, message));

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(notifier.timeout_ms).await;
            notifier.dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationLevel::Info, "a".to_string());
        let b = queue.push(NotificationLevel::Error, "b".to_string());
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationLevel::Info, "a".to_string());
        queue.push(NotificationLevel::Success, "b".to_string());
        queue.dismiss(a);

        let messages: Vec<&str> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["b"]);

        // ids are not reused after a dismiss
        let c = queue.push(NotificationLevel::Info, "c".to_string());
        assert_ne!(c, a);
    }
}
