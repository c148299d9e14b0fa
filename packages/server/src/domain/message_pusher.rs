//! MessagePusher trait 定義
//!
//! Use cases push room events through this interface; the infrastructure
//! layer decides how events are encoded and delivered.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomEvent};

/// Outbound channel of a single connection (already-encoded text frames)
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Add a connection once its WebSocket handshake has completed
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Remove a connection; no-op when it is not registered
    async fn unregister_client(&self, connection_id: ConnectionId);

    /// Send an event to one connection only
    async fn push_to(
        &self,
        connection_id: ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError>;

    /// Send an event to every open connection except `exclude`.
    ///
    /// Per-recipient failures are logged and skipped; an error is returned
    /// only when the event cannot be encoded at all.
    async fn broadcast(
        &self,
        event: &RoomEvent,
        exclude: Option<ConnectionId>,
    ) -> Result<(), MessagePushError>;
}
