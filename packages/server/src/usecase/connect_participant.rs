//! UseCase: 接続の登録

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// Registers a freshly upgraded connection so it receives broadcasts.
///
/// Joining the game is a separate step (`NEW_USER`); a registered
/// connection without a seat still sees every broadcast.
pub struct ConnectParticipantUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectParticipantUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Register `sender` under a new connection id and return the id
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
        connection_id
    }
}
