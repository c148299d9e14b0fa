//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を `ConnectionRegistry` で管理
//! - `RoomEvent` を wire format (`ServerMessage`) に変換して送信
//!
//! The socket itself lives in the UI layer (`ui/handler/websocket.rs`), which
//! spawns a writer task draining each connection's channel.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use hotpotato_shared::protocol::ServerMessage;

use super::registry::ConnectionRegistry;
use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RoomEvent};

pub struct WebSocketMessagePusher {
    registry: Arc<Mutex<ConnectionRegistry>>,
}

impl WebSocketMessagePusher {
    pub fn new(registry: Arc<Mutex<ConnectionRegistry>>) -> Self {
        Self { registry }
    }

    fn encode(event: &RoomEvent) -> Result<String, MessagePushError> {
        ServerMessage::from(event)
            .to_json()
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut registry = self.registry.lock().await;
        registry.register(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: ConnectionId) {
        let mut registry = self.registry.lock().await;
        if registry.unregister(&connection_id) {
            tracing::debug!(
                "Connection '{}' unregistered from MessagePusher",
                connection_id
            );
        }
    }

    async fn push_to(
        &self,
        connection_id: ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        let content = Self::encode(event)?;
        let registry = self.registry.lock().await;

        let sender = registry
            .get(&connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed {:?} to connection '{}'", event, connection_id);

        Ok(())
    }

    async fn broadcast(
        &self,
        event: &RoomEvent,
        exclude: Option<ConnectionId>,
    ) -> Result<(), MessagePushError> {
        // encode once, send the same payload to everyone
        let content = Self::encode(event)?;
        let registry = self.registry.lock().await;

        let mut delivered = 0usize;
        for (connection_id, sender) in registry.open_connections() {
            if exclude == Some(*connection_id) {
                continue;
            }
            // ブロードキャストでは一部の送信失敗を許容
            match sender.send(content.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::warn!(
                    "Failed to push message to connection '{}': {}",
                    connection_id,
                    e
                ),
            }
        }
        tracing::debug!("Broadcasted {:?} to {} connection(s)", event, delivered);

        Ok(())
    }
}
