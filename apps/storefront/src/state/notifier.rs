//! # Notifications
//!
//! User-facing messages raised by cart operations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore ──notify()──► dyn Notifier                                  │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │      ConsoleNotifier                 BroadcastNotifier                  │
//! │      (stderr, CLI)                   (tokio broadcast, any UI)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Notifiers must not block: they are called while the cart lock is held.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Message texts shown to the user.
pub mod messages {
    pub const OUT_OF_STOCK: &str = "Requested quantity out of stock";
    pub const ADD_FAILED: &str = "Error adding product";
    pub const REMOVE_FAILED: &str = "Error removing product";
    pub const UPDATE_FAILED: &str = "Error updating product quantity";
}

/// A single user-facing error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

// =============================================================================
// Console
// =============================================================================

/// Writes each notification as one line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let mut stderr = std::io::stderr().lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(stderr, "error: {}", notification.message);
    }
}

// =============================================================================
// Broadcast
// =============================================================================

/// Fans notifications out to any number of subscribers.
///
/// Sending with no live subscribers drops the message.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    /// Creates a notifier that buffers up to `capacity` messages per
    /// subscriber before lagging ones start missing messages.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        BroadcastNotifier { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            debug!("Notification dropped, no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_reaches_every_subscriber() {
        let notifier = BroadcastNotifier::default();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.notify(Notification::new(messages::ADD_FAILED));

        assert_eq!(first.recv().await.unwrap().message, "Error adding product");
        assert_eq!(second.recv().await.unwrap().message, "Error adding product");
    }

    #[test]
    fn test_broadcast_without_subscribers_is_silent() {
        let notifier = BroadcastNotifier::new(0);
        notifier.notify(Notification::new(messages::REMOVE_FAILED));
    }

    #[test]
    fn test_notification_serializes_camel_case() {
        let json = serde_json::to_value(Notification::new(messages::OUT_OF_STOCK)).unwrap();
        assert_eq!(json["message"], "Requested quantity out of stock");
        assert!(json.get("raisedAt").is_some());
    }
}
