// Toast notifications.
// Implements the notifier collaborator as short-lived status bar messages.

use chrono::{DateTime, TimeDelta, Utc};

use super::collab::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Longest supported toast lifetime.
pub const MAX_TOAST_SECONDS: u64 = 3600;

/// Queue of recent notifications; only the newest live one is shown.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: TimeDelta,
}

impl Toasts {
    /// Lifetimes above `MAX_TOAST_SECONDS` are clamped.
    pub fn new(lifetime_secs: u64) -> Self {
        let secs = lifetime_secs.min(MAX_TOAST_SECONDS);
        let lifetime = i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    fn push(&mut self, level: ToastLevel, message: &str) {
        self.items.push(Toast {
            level,
            message: message.to_string(),
            created_at: Utc::now(),
        });
        tracing::info!(?level, text = message, queued = self.len(), "toast");
    }

    /// Drop toasts older than the configured lifetime.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let lifetime = self.lifetime;
        self.items.retain(|t| now.signed_duration_since(t.created_at) < lifetime);
    }

    /// Newest toast that has not yet expired.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&Toast> {
        self.items
            .last()
            .filter(|t| now.signed_duration_since(t.created_at) < self.lifetime)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Notifier for Toasts {
    fn success(&mut self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}
