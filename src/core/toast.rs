//! Toast queue: transient success/error/info messages with a fixed lifetime

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a toast stays visible unless dismissed
pub const TOAST_TTL_MS: u32 = 5_000;

pub type ToastId = Uuid;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Material Symbols glyph for the kind
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// Creation time in milliseconds
    pub created_at: i64,
}

impl Toast {
    pub fn expires_at(&self) -> i64 {
        self.created_at + i64::from(TOAST_TTL_MS)
    }
}

/// Ordered queue of visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id; blank messages are dropped
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
        now_ms: i64,
    ) -> ToastId {
        let id = Uuid::new_v4();
        self.entries.push(Toast {
            id,
            kind,
            title: title.into(),
            message: message.filter(|m| !m.trim().is_empty()),
            created_at: now_ms,
        });
        id
    }

    /// Dismiss a toast; returns whether it was still queued
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|toast| toast.id != id);
        self.entries.len() != before
    }

    /// Drop every toast whose lifetime has elapsed at `now_ms`
    pub fn expire(&mut self, now_ms: i64) {
        self.entries.retain(|toast| toast.expires_at() > now_ms);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Success, "Course Created", None, 0);
        queue.push(ToastKind::Error, "Upload Error", Some("too big".into()), 10);

        let titles: Vec<_> = queue.entries().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Course Created", "Upload Error"]);
        assert_eq!(queue.entries()[1].message.as_deref(), Some("too big"));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "a", None, 0);
        let b = queue.push(ToastKind::Info, "a", None, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_message_is_dropped() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Error, "Failed", Some("   ".into()), 0);
        assert_eq!(queue.entries()[0].message, None);
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut queue = ToastQueue::new();
        let t = 1_000;
        queue.push(ToastKind::Info, "Starting Class...", None, t);

        queue.expire(t + 4_999);
        assert_eq!(queue.len(), 1);

        queue.expire(t + i64::from(TOAST_TTL_MS) + 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_keeps_younger_toasts() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Info, "old", None, 0);
        let young = queue.push(ToastKind::Info, "young", None, 3_000);

        queue.expire(5_001);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.entries()[0].id, young);
    }

    #[test]
    fn test_manual_dismissal() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Success, "Saved", None, 0);
        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
    }
}
