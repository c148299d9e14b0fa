//! UseCase: ゲームへの参加 (`NEW_USER`)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 到着順の座席割り当て（0 から連番）
//! - 5 人目以降への GAME_FULL 応答と状態が変わらないこと
//! - 4 人目の着席でポテト保持者の通知とカウントダウンが始まること
//! - 同じ接続からの再送で 2 つ目の座席が割り当てられること（既知の挙動）

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, ROOM_CAPACITY, RoomEvent, SeatClaim, SeatIndex, SeatPicker,
};

use super::{PassPotatoUseCase, RoundHandle, SharedRoom, StartCountdownUseCase};

/// Result of a join request
#[derive(Debug)]
pub enum JoinOutcome {
    Seated {
        seat: SeatIndex,
        /// Set when this join filled the room and started the round clock
        round: Option<RoundHandle>,
    },
    Full,
}

/// Seats a connection, or tells it the room is full.
///
/// The connection is not checked for an existing seat: sending `NEW_USER`
/// twice from one socket takes two seats.
pub struct JoinGameUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
    seat_picker: Arc<dyn SeatPicker>,
    pass_potato_usecase: Arc<PassPotatoUseCase>,
    start_countdown_usecase: Arc<StartCountdownUseCase>,
}

impl JoinGameUseCase {
    pub fn new(
        room: SharedRoom,
        message_pusher: Arc<dyn MessagePusher>,
        seat_picker: Arc<dyn SeatPicker>,
        pass_potato_usecase: Arc<PassPotatoUseCase>,
        start_countdown_usecase: Arc<StartCountdownUseCase>,
    ) -> Self {
        Self {
            room,
            message_pusher,
            seat_picker,
            pass_potato_usecase,
            start_countdown_usecase,
        }
    }

    pub async fn execute(&self, connection_id: ConnectionId) -> JoinOutcome {
        let mut room = self.room.lock().await;

        let (seat, room_filled) = match room.claim_seat() {
            SeatClaim::Seated { seat, room_filled } => (seat, room_filled),
            SeatClaim::Full => {
                tracing::info!("Room is full, rejecting connection '{}'", connection_id);
                if let Err(e) = self
                    .message_pusher
                    .push_to(connection_id, &RoomEvent::GameFull)
                    .await
                {
                    tracing::warn!("Failed to send game-full to '{}': {}", connection_id, e);
                }
                return JoinOutcome::Full;
            }
        };

        tracing::info!("Connection '{}' seated at {}", connection_id, seat);
        if let Err(e) = self
            .message_pusher
            .push_to(connection_id, &RoomEvent::PlayerAssigned { seat })
            .await
        {
            tracing::warn!(
                "Failed to send player assignment to '{}': {}",
                connection_id,
                e
            );
        }

        if !room_filled {
            return JoinOutcome::Seated { seat, round: None };
        }

        // 4 人揃ったらラウンド開始
        let first_holder = self.seat_picker.pick(ROOM_CAPACITY);
        self.pass_potato_usecase
            .pass_locked(&mut room, first_holder.as_holder_index())
            .await;

        let round = match self.start_countdown_usecase.start_locked(&mut room) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Could not start the round clock: {}", e);
                None
            }
        };

        JoinOutcome::Seated { seat, round }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        domain::{FixedSeatPicker, GameConfig, RandomSeatPicker, Room, RoomPhase},
        infrastructure::message_pusher::WebSocketMessagePusher,
        usecase::test_support::{connect, create_test_message_pusher, create_test_room, drain},
    };

    struct Fixture {
        room: SharedRoom,
        pusher: Arc<WebSocketMessagePusher>,
        usecase: JoinGameUseCase,
    }

    fn create_fixture(seat_picker: Arc<dyn SeatPicker>, config: GameConfig) -> Fixture {
        let room = create_test_room();
        let pusher = create_test_message_pusher();
        let pass_potato = Arc::new(PassPotatoUseCase::new(room.clone(), pusher.clone()));
        let start_countdown = Arc::new(StartCountdownUseCase::new(
            room.clone(),
            pusher.clone(),
            config,
        ));
        let usecase = JoinGameUseCase::new(
            room.clone(),
            pusher.clone(),
            seat_picker,
            pass_potato,
            start_countdown,
        );
        Fixture {
            room,
            pusher,
            usecase,
        }
    }

    fn assignment_json(index: usize) -> String {
        format!(r#"{{"type":"PLAYER_ASSIGNMENT","payload":{{"clientPlayerIndex":{index}}}}}"#)
    }

    fn holder_json(index: i64) -> String {
        format!(r#"{{"type":"NEW_POTATO_HOLDER","payload":{{"newPotatoHolderIndex":{index}}}}}"#)
    }

    #[tokio::test(start_paused = true)]
    async fn test_seats_are_assigned_in_arrival_order() {
        // テスト項目: 最初の 3 人には 0, 1, 2 が直接送られ、ブロードキャストはない
        // given (前提条件):
        let fixture = create_fixture(Arc::new(FixedSeatPicker::new(0)), GameConfig::default());
        let mut players = Vec::new();
        for _ in 0..3 {
            players.push(connect(fixture.pusher.as_ref()).await);
        }

        // when (操作):
        for (id, _) in &players {
            let outcome = fixture.usecase.execute(*id).await;
            assert!(matches!(outcome, JoinOutcome::Seated { round: None, .. }));
        }

        // then (期待する結果):
        for (index, (_, rx)) in players.iter_mut().enumerate() {
            assert_eq!(drain(rx), vec![assignment_json(index)]);
        }
        let room = fixture.room.lock().await;
        assert_eq!(room.seat_count(), 3);
        assert_eq!(room.phase(), RoomPhase::WaitingForPlayers);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fourth_seat_starts_the_round() {
        // テスト項目: 4 人目の着席で NEW_POTATO_HOLDER が全員に届き、カウントダウンが始まる
        // given (前提条件):
        let fixture = create_fixture(Arc::new(FixedSeatPicker::new(2)), GameConfig::default());
        let mut players = Vec::new();
        for _ in 0..4 {
            players.push(connect(fixture.pusher.as_ref()).await);
        }
        for (id, _) in players.iter().take(3) {
            fixture.usecase.execute(*id).await;
        }
        for (_, rx) in players.iter_mut() {
            drain(rx);
        }

        // when (操作):
        let outcome = fixture.usecase.execute(players[3].0).await;

        // then (期待する結果):
        let JoinOutcome::Seated { seat, round } = outcome else {
            panic!("fourth player should be seated");
        };
        assert_eq!(seat, SeatIndex::new(3));
        assert!(round.is_some());

        for (index, (_, rx)) in players.iter_mut().enumerate() {
            let messages = drain(rx);
            if index == 3 {
                assert_eq!(messages, vec![assignment_json(3), holder_json(2)]);
            } else {
                assert_eq!(messages, vec![holder_json(2)]);
            }
        }

        let room = fixture.room.lock().await;
        assert_eq!(room.phase(), RoomPhase::RoundActive);
        assert_eq!(room.countdown(), Some(30));
        assert_eq!(room.potato_holder(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fifth_player_gets_game_full() {
        // テスト項目: 5 人目は GAME_FULL を受け取り、座席数は変わらない
        // given (前提条件):
        let fixture = create_fixture(Arc::new(FixedSeatPicker::new(0)), GameConfig::default());
        for _ in 0..4 {
            let (id, _rx) = connect(fixture.pusher.as_ref()).await;
            fixture.usecase.execute(id).await;
        }
        let (late, mut late_rx) = connect(fixture.pusher.as_ref()).await;
        drain(&mut late_rx);
        let before = fixture.room.lock().await.clone();

        // when (操作):
        let outcome = fixture.usecase.execute(late).await;
        let again = fixture.usecase.execute(late).await;

        // then (期待する結果):
        assert!(matches!(outcome, JoinOutcome::Full));
        assert!(matches!(again, JoinOutcome::Full));
        assert_eq!(
            drain(&mut late_rx),
            vec![r#"{"type":"GAME_FULL"}"#, r#"{"type":"GAME_FULL"}"#]
        );
        assert_eq!(*fixture.room.lock().await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resending_new_user_takes_another_seat() {
        // テスト項目: 同じ接続から NEW_USER を再送すると別の座席が割り当てられる
        // given (前提条件):
        let fixture = create_fixture(Arc::new(FixedSeatPicker::new(0)), GameConfig::default());
        let (id, mut rx) = connect(fixture.pusher.as_ref()).await;

        // when (操作):
        fixture.usecase.execute(id).await;
        fixture.usecase.execute(id).await;

        // then (期待する結果):
        assert_eq!(drain(&mut rx), vec![assignment_json(0), assignment_json(1)]);
        assert_eq!(fixture.room.lock().await.seat_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_room_reopens_after_game_over() {
        // テスト項目: GAME_OVER 後は座席 0 から再び割り当てられる
        // given (前提条件):
        let fixture = create_fixture(Arc::new(RandomSeatPicker), GameConfig::new(1));
        let mut round = None;
        for _ in 0..4 {
            let (id, _rx) = connect(fixture.pusher.as_ref()).await;
            if let JoinOutcome::Seated { round: Some(handle), .. } =
                fixture.usecase.execute(id).await
            {
                round = Some(handle);
            }
        }
        let (watcher, mut watcher_rx) = connect(fixture.pusher.as_ref()).await;
        round.expect("round should have started").await.unwrap();

        // when (操作):
        let outcome = fixture.usecase.execute(watcher).await;

        // then (期待する結果):
        let messages = drain(&mut watcher_rx);
        assert_eq!(messages.last(), Some(&assignment_json(0)));
        assert!(messages.contains(&r#"{"type":"GAME_OVER"}"#.to_string()));
        assert!(matches!(
            outcome,
            JoinOutcome::Seated { seat, round: None } if seat == SeatIndex::new(0)
        ));
        assert_eq!(fixture.room.lock().await.seat_count(), 1);
        assert_ne!(*fixture.room.lock().await, Room::new());
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_holder_is_broadcast_before_first_tick() {
        // テスト項目: 最初の NEW_POTATO_HOLDER は最初の COUNTDOWN より前に、同じ処理内で届く
        // given (前提条件):
        let fixture = create_fixture(Arc::new(RandomSeatPicker), GameConfig::default());
        let (observer, mut rx) = connect(fixture.pusher.as_ref()).await;
        fixture.usecase.execute(observer).await;
        for _ in 0..3 {
            let (id, _rx) = connect(fixture.pusher.as_ref()).await;
            fixture.usecase.execute(id).await;
        }

        // when (操作):
        let immediate = drain(&mut rx);
        tokio::time::sleep(Duration::from_millis(1001)).await;
        let after_first_tick = drain(&mut rx);

        // then (期待する結果):
        assert_eq!(immediate.len(), 2);
        assert_eq!(immediate[0], assignment_json(0));
        let holder: serde_json::Value = serde_json::from_str(&immediate[1]).unwrap();
        assert_eq!(holder["type"], "NEW_POTATO_HOLDER");
        let index = holder["payload"]["newPotatoHolderIndex"].as_i64().unwrap();
        assert!((0..4).contains(&index));
        assert_eq!(
            after_first_tick,
            vec![r#"{"type":"COUNTDOWN","payload":{"clockValue":30}}"#]
        );
    }
}
