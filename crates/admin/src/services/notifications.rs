//! Toast notification queue.
//!
//! Handlers push success and error toasts after a core operation returns;
//! the order ledger pushes one for every status change through the
//! [`StatusListener`] impl. Pages drain the queue when they render.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cafe_core::{StatusChanged, StatusListener};
use serde::Serialize;
use tracing::debug;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class used by the base template.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded FIFO of pending toasts.
///
/// When full, the oldest toast is dropped to make room.
#[derive(Debug)]
pub struct NotificationCenter {
    limit: usize,
    queue: Mutex<VecDeque<Toast>>,
}

impl NotificationCenter {
    /// Create a queue holding at most `limit` toasts (minimum one).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            queue: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Take every pending toast, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Toast> {
        self.lock().drain(..).collect()
    }

    /// Number of toasts waiting to be shown.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn push(&self, kind: ToastKind, message: String) {
        debug!(?kind, %message, "Queued toast");
        let mut queue = self.lock();
        while queue.len() >= self.limit {
            queue.pop_front();
        }
        queue.push_back(Toast { kind, message });
    }

    // A panic while holding the lock cannot leave the queue half-updated.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusListener for NotificationCenter {
    fn status_changed(&self, event: &StatusChanged) {
        debug!(
            order_id = %event.order_id,
            from = event.from.as_str(),
            to = event.to.as_str(),
            transition = event.is_transition(),
            "Order status updated"
        );
        let message = if event.is_transition() {
            format!("Order {} has been {}", event.order_id, event.to.as_str())
        } else {
            format!("Order {} is already {}", event.order_id, event.to.as_str())
        };
        self.success(message);
    }
}

#[cfg(test)]
mod tests {
    use cafe_core::{OrderId, OrderStatus};

    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let center = NotificationCenter::new(5);
        center.success("Item added successfully");
        center.error("menu item not found: 9");

        let toasts = center.drain();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].message, "menu item not found: 9");
        assert_eq!(center.pending(), 0);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let center = NotificationCenter::new(2);
        center.success("one");
        center.success("two");
        center.success("three");

        let messages: Vec<_> = center.drain().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_limit_still_keeps_latest() {
        let center = NotificationCenter::new(0);
        center.success("only");
        assert_eq!(center.pending(), 1);
    }

    #[test]
    fn test_status_change_message() {
        let center = NotificationCenter::new(5);
        center.status_changed(&StatusChanged {
            order_id: OrderId::new("ORD-001"),
            from: OrderStatus::Pending,
            to: OrderStatus::Completed,
        });

        let toasts = center.drain();
        assert_eq!(toasts[0].message, "Order ORD-001 has been completed");
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[test]
    fn test_same_status_update_still_toasts() {
        let center = NotificationCenter::new(5);
        center.status_changed(&StatusChanged {
            order_id: OrderId::new("ORD-002"),
            from: OrderStatus::Completed,
            to: OrderStatus::Completed,
        });

        let toasts = center.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Order ORD-002 is already completed");
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }
}
