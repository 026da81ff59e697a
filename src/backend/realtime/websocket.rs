/**
 * WebSocket Notification Handler
 *
 * Implements `GET /notifications/ws/json/1` and the live-sync variant
 * `GET /livesync/ws/json/2/{authid}/sub`. Both upgrade to a WebSocket and
 * register the connection with the `NotificationHub`.
 *
 * # Connection Management
 *
 * - The hub receiver is taken before the upgrade response is sent, so a client
 *   sees every notification sent after its handshake completes
 * - A writer task forwards notifications as text frames, each with a 10 second
 *   write deadline; a failed or timed-out write ends the connection
 * - The handler task reads incoming frames until the client closes, logging and
 *   otherwise ignoring them, then tells the writer to shut down so the close
 *   handshake is flushed before the hub receiver is dropped
 * - Lagged notifications are logged and skipped; the connection stays open
 */

use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::{broadcast, oneshot};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use uuid::Uuid;

use crate::backend::realtime::hub::NotificationHub;
use crate::shared::Notification;

/// Deadline for writing a single frame to a client
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle notification socket (GET /notifications/ws/json/1)
pub async fn handle_notification_socket(
    State(hub): State<NotificationHub>,
    ws: WebSocketUpgrade,
) -> Response {
    accept(hub, ws, None)
}

/// Handle live-sync socket (GET /livesync/ws/json/2/{authid}/sub)
///
/// Same behaviour as the notification socket; the auth id is only logged.
pub async fn handle_livesync_socket(
    State(hub): State<NotificationHub>,
    Path(auth_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    accept(hub, ws, Some(auth_id))
}

fn accept(hub: NotificationHub, ws: WebSocketUpgrade, auth_id: Option<String>) -> Response {
    let client_id = Uuid::new_v4();
    let receiver = hub.subscribe();

    match auth_id {
        Some(auth_id) => tracing::info!(
            "[Hub] Accepting live-sync client {} for {} ({} connected)",
            client_id,
            auth_id,
            hub.client_count()
        ),
        None => tracing::info!(
            "[Hub] Accepting client {} ({} connected)",
            client_id,
            hub.client_count()
        ),
    }

    ws.on_upgrade(move |socket| run_client(socket, receiver, client_id))
}

/// Drive one connection until either side gives up
async fn run_client(
    socket: WebSocket,
    receiver: broadcast::Receiver<Notification>,
    client_id: Uuid,
) {
    let (sink, mut incoming) = socket.split();
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let mut writer = tokio::spawn(forward_notifications(sink, receiver, client_id, shutdown_rx));

    let writer_finished = loop {
        tokio::select! {
            frame = incoming.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    tracing::info!("[Hub] Client {} sent: {}", client_id, text.as_str());
                }
                Some(Ok(Message::Binary(data))) => {
                    tracing::debug!("[Hub] Client {} sent {} binary bytes", client_id, data.len());
                }
                Some(Ok(Message::Close(_))) | None => break false,
                // ping/pong replies are handled by axum
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("[Hub] Read from client {} failed: {:?}", client_id, e);
                    break false;
                }
            },
            _ = &mut writer => break true,
        }
    };

    if !writer_finished {
        let _ = shutdown_tx.send(());
        if tokio::time::timeout(WRITE_TIMEOUT, &mut writer).await.is_err() {
            tracing::warn!("[Hub] Writer for client {} did not stop, aborting", client_id);
            writer.abort();
        }
    }

    tracing::info!("[Hub] Client {} disconnected", client_id);
}

/// Write notifications to one client until shutdown or a failed write
///
/// Owns the client's hub receiver, so the client stays registered exactly as
/// long as this task runs.
async fn forward_notifications<S>(
    mut sink: S,
    receiver: broadcast::Receiver<Notification>,
    client_id: Uuid,
    mut shutdown: oneshot::Receiver<()>,
) where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Debug,
{
    let mut notifications = BroadcastStream::new(receiver);

    loop {
        let item = tokio::select! {
            _ = &mut shutdown => break,
            item = notifications.next() => item,
        };

        let notification = match item {
            Some(Ok(notification)) => notification,
            Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                tracing::warn!("[Hub] Client {} lagged, skipped {} notifications", client_id, skipped);
                continue;
            }
            None => {
                tracing::debug!("[Hub] Notification channel closed for client {}", client_id);
                break;
            }
        };

        let frame = match notification.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!("[Hub] Failed to serialize notification: {:?}", e);
                continue;
            }
        };

        match tokio::time::timeout(WRITE_TIMEOUT, sink.send(Message::Text(frame.into()))).await {
            Ok(Ok(())) => tracing::debug!("[Hub] Sent notification to client {}", client_id),
            Ok(Err(e)) => {
                tracing::warn!("[Hub] Write to client {} failed: {:?}", client_id, e);
                return;
            }
            Err(_) => {
                tracing::warn!("[Hub] Write to client {} timed out", client_id);
                return;
            }
        }
    }

    if let Err(e) = sink.close().await {
        tracing::debug!("[Hub] Closing client {} failed: {:?}", client_id, e);
    }
}
