//! Conversion logic between domain events and wire messages.

use hotpotato_shared::protocol::ServerMessage;

use crate::domain::{Room, RoomEvent};

use super::http::RoomStateDto;

impl From<&RoomEvent> for ServerMessage {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::PlayerAssigned { seat } => ServerMessage::player_assignment(seat.value()),
            RoomEvent::GameFull => ServerMessage::GameFull,
            RoomEvent::NewPotatoHolder { index } => ServerMessage::new_potato_holder(*index),
            RoomEvent::Countdown { clock_value } => ServerMessage::countdown(*clock_value),
            RoomEvent::GameOver => ServerMessage::GameOver,
        }
    }
}

impl From<&Room> for RoomStateDto {
    fn from(room: &Room) -> Self {
        Self {
            seat_count: room.seat_count(),
            phase: room.phase().as_str().to_string(),
            potato_holder: room.potato_holder(),
            countdown: room.countdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeatIndex;

    #[test]
    fn test_room_events_to_server_messages() {
        // テスト項目: ドメインイベントが対応するサーバーメッセージに変換される
        // given (前提条件):
        let cases = [
            (
                RoomEvent::PlayerAssigned {
                    seat: SeatIndex::new(1),
                },
                ServerMessage::player_assignment(1),
            ),
            (RoomEvent::GameFull, ServerMessage::GameFull),
            (
                RoomEvent::NewPotatoHolder { index: 9 },
                ServerMessage::new_potato_holder(9),
            ),
            (
                RoomEvent::Countdown { clock_value: 7 },
                ServerMessage::countdown(7),
            ),
            (RoomEvent::GameOver, ServerMessage::GameOver),
        ];

        for (event, expected) in cases {
            // when (操作):
            let message = ServerMessage::from(&event);

            // then (期待する結果):
            assert_eq!(message, expected);
        }
    }

    #[test]
    fn test_room_to_state_dto() {
        // given (前提条件):
        let mut room = Room::new();
        room.claim_seat();
        room.claim_seat();
        room.record_potato_holder(1);

        // when (操作):
        let dto = RoomStateDto::from(&room);

        // then (期待する結果):
        assert_eq!(dto.seat_count, 2);
        assert_eq!(dto.phase, "WAITING_FOR_PLAYERS");
        assert_eq!(dto.potato_holder, Some(1));
        assert_eq!(dto.countdown, None);
    }
}
