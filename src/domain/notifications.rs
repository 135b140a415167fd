//! Transient toast notifications.
//!
//! Controllers report outcomes through the [`Notifier`] trait. The
//! [`NotificationCenter`] is the implementation the dashboard renders from:
//! it keeps a short queue of toasts and drops them once they outlive the
//! configured time-to-live.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts kept on screen at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    /// Destructive or failed actions.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct NotificationCenter {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Queues a notification stamped with an explicit time.
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        match notification.kind {
            NotificationKind::Info => {
                tracing::info!(title = %notification.title, "{}", notification.description)
            }
            NotificationKind::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.description)
            }
        }

        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
        while self.toasts.len() > MAX_VISIBLE_NOTIFICATIONS {
            self.toasts.pop_front();
        }
    }

    /// Drops every toast shown more than `ttl` before `now`.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Live toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|toast| &toast.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}
