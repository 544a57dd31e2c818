use std::collections::VecDeque;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Human-readable outcome messages, shown once and then dropped
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.queue.push_back(Notification {
            kind,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Danger, message);
    }

    /// Everything queued so far, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
