//! Transient, auto-expiring status messages.
//!
//! A notification lives until it is dismissed or until it is `ttl` old,
//! whichever comes first. The queue does not run timers itself: the owner
//! calls [`NotificationQueue::expire`] with the current time and receives the
//! notifications that just closed.

use crate::model::{Notification, NotificationKind};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TTL_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl NotificationQueue {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            items: Vec::new(),
            ttl: Duration::milliseconds(ttl_ms.min(i64::MAX as u64) as i64),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Queues a message and returns its id.
    pub fn add(&mut self, message: impl Into<String>, kind: NotificationKind) -> i64 {
        self.add_at(message, kind, Utc::now())
    }

    pub fn add_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> i64 {
        let notification = Notification::new(message, kind, now);
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Dismisses a notification. Unknown ids are ignored.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|n| n.id != id);
    }

    /// Removes and returns every notification that has reached its ttl.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        let ttl = self.ttl;
        let (expired, live): (Vec<_>, Vec<_>) = self
            .items
            .drain(..)
            .partition(|n| now.signed_duration_since(n.created_at) >= ttl);
        self.items = live;
        expired
    }

    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes every queued notification, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }
}
