//! UseCase: ルーム状態の取得

use crate::domain::Room;

use super::SharedRoom;

pub struct GetRoomStateUseCase {
    room: SharedRoom,
}

impl GetRoomStateUseCase {
    pub fn new(room: SharedRoom) -> Self {
        Self { room }
    }

    /// Snapshot of the room
    pub async fn execute(&self) -> Room {
        self.room.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::create_test_room;

    #[tokio::test]
    async fn test_snapshot_reflects_current_room() {
        // given (前提条件):
        let room = create_test_room();
        room.lock().await.claim_seat();
        let usecase = GetRoomStateUseCase::new(room.clone());

        // when (操作):
        let snapshot = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(snapshot.seat_count(), 1);
    }
}
