//! UseCase: ポテトの受け渡し

use std::sync::Arc;

use crate::domain::{MessagePusher, Room, RoomEvent};

use super::SharedRoom;

/// Broadcasts a new potato holder to every open connection.
///
/// Any connection may pass the potato at any time, in any phase, to any
/// index. Nothing is validated; the index is relayed as received.
pub struct PassPotatoUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PassPotatoUseCase {
    pub fn new(room: SharedRoom, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            room,
            message_pusher,
        }
    }

    pub async fn execute(&self, new_holder_index: i64) {
        let mut room = self.room.lock().await;
        self.pass_locked(&mut room, new_holder_index).await;
    }

    /// Same as `execute` for a caller that already holds the room lock
    pub(crate) async fn pass_locked(&self, room: &mut Room, new_holder_index: i64) {
        room.record_potato_holder(new_holder_index);
        tracing::info!("Potato passed to {}", new_holder_index);

        let event = RoomEvent::NewPotatoHolder {
            index: new_holder_index,
        };
        if let Err(e) = self.message_pusher.broadcast(&event, None).await {
            tracing::warn!("Failed to broadcast new potato holder: {}", e);
        }
    }
}
