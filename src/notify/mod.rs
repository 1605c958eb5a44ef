//! Notifications describing the outcome of an edit
//!
//! The server shows notifications as toasts: a sink pushes them into a
//! bounded queue and the next rendered page drains it.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A human-readable outcome message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receives notifications for display
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A notification waiting to be shown
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    #[serde(flatten)]
    pub notification: Notification,
    pub issued_at: DateTime<Local>,
}

/// Bounded queue of pending toasts; the oldest is dropped when full
#[derive(Debug)]
pub struct ToastQueue {
    pending: Mutex<VecDeque<Toast>>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Take all pending toasts, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "Notification"
        );

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(Toast {
            notification,
            issued_at: Local::now(),
        });
    }
}
