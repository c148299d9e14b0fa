//! UseCase: 接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher};

/// Removes a closed connection from the registry.
///
/// Seats the connection held are not reclaimed; the room only frees seats
/// when a round ends.
pub struct DisconnectParticipantUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(&self, connection_id: ConnectionId) {
        self.message_pusher.unregister_client(connection_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockMessagePusher, RoomEvent},
        usecase::test_support::{connect, create_test_message_pusher, drain},
    };

    #[tokio::test]
    async fn test_disconnected_participant_stops_receiving() {
        // テスト項目: 切断後の接続にはブロードキャストが届かない
        // given (前提条件):
        let pusher = create_test_message_pusher();
        let usecase = DisconnectParticipantUseCase::new(pusher.clone());
        let (leaving, mut leaving_rx) = connect(pusher.as_ref()).await;
        let (_staying, mut staying_rx) = connect(pusher.as_ref()).await;

        // when (操作):
        usecase.execute(leaving).await;
        pusher.broadcast(&RoomEvent::GameOver, None).await.unwrap();

        // then (期待する結果):
        assert!(drain(&mut leaving_rx).is_empty());
        assert_eq!(drain(&mut staying_rx).len(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_delegates_to_pusher() {
        // given (前提条件):
        let id = ConnectionId::generate();
        let mut mock = MockMessagePusher::new();
        mock.expect_unregister_client()
            .withf(move |connection_id| *connection_id == id)
            .times(1)
            .return_const(());
        let usecase = DisconnectParticipantUseCase::new(Arc::new(mock));

        // when (操作):
        usecase.execute(id).await;

        // then (期待する結果): expectations are verified on drop
    }
}
