/**
 * Notification Hub
 *
 * The registry of connected WebSocket clients and the fan-out point for
 * notifications.
 *
 * # Broadcasting
 *
 * The hub wraps a `tokio::sync::broadcast` channel. Every connection holds
 * one receiver, so a client is registered for exactly as long as its
 * receiver lives: subscribing registers it, dropping the receiver when the
 * socket closes removes it. The live client count is the receiver count.
 *
 * The channel buffer is the only bound. A client that falls more than
 * `capacity` notifications behind skips the oldest ones and keeps going.
 */

use tokio::sync::broadcast;

use crate::shared::Notification;

/// Registry of connected clients
///
/// Cheap to clone; all clones share the same channel.
#[derive(Debug, Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<Notification>,
}

impl NotificationHub {
    /// Create a hub buffering up to `capacity` notifications per client
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a new client
    ///
    /// The client stays registered until the returned receiver is dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Number of connected clients
    pub fn client_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Send a notification to every connected client
    ///
    /// # Returns
    ///
    /// Number of clients the notification was queued for (0 if none are connected)
    pub fn send(&self, notification: impl Into<Notification>) -> usize {
        match self.sender.send(notification.into()) {
            Ok(client_count) => {
                tracing::info!("[Hub] Notification queued for {} clients", client_count);
                client_count
            }
            Err(_) => {
                tracing::debug!("[Hub] No clients connected, notification dropped");
                0
            }
        }
    }
}
