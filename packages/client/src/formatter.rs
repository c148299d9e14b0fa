//! Message formatting utilities for client display.

use hotpotato_shared::protocol::ServerMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a server message.
    ///
    /// `my_seat` is the seat this client was assigned, used to point out
    /// when we are holding the potato.
    pub fn format_server_message(message: &ServerMessage, my_seat: Option<usize>) -> String {
        match message {
            ServerMessage::PlayerAssignment(payload) => {
                Self::format_player_assignment(payload.client_player_index)
            }
            ServerMessage::GameFull => Self::format_game_full(),
            ServerMessage::NewPotatoHolder(payload) => {
                Self::format_new_potato_holder(payload.new_potato_holder_index, my_seat)
            }
            ServerMessage::Countdown(payload) => Self::format_countdown(payload.clock_value),
            ServerMessage::GameOver => Self::format_game_over(),
        }
    }

    pub fn format_player_assignment(index: usize) -> String {
        format!("\n* You are player {}\n", index)
    }

    pub fn format_game_full() -> String {
        "\n! The game is full, try again after this round\n".to_string()
    }

    pub fn format_new_potato_holder(holder: i64, my_seat: Option<usize>) -> String {
        let is_me = my_seat.is_some_and(|seat| seat as i64 == holder);
        if is_me {
            "\n>>> You have the potato! Pass it: pass <seat>\n".to_string()
        } else {
            format!("\n~ Player {} has the potato\n", holder)
        }
    }

    pub fn format_countdown(clock_value: u32) -> String {
        format!("\n{}s left\n", clock_value)
    }

    pub fn format_game_over() -> String {
        "\n\n============================================================\n\
         GAME OVER\n\
         ============================================================\n"
            .to_string()
    }

    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_player_assignment() {
        // given (前提条件):
        let message = ServerMessage::player_assignment(2);

        // when (操作):
        let result = MessageFormatter::format_server_message(&message, None);

        // then (期待する結果):
        assert!(result.contains("You are player 2"));
    }

    #[test]
    fn test_format_potato_held_by_me() {
        // テスト項目: 自分がポテトを持っている場合に強調表示される
        // given (前提条件):
        let message = ServerMessage::new_potato_holder(1);

        // when (操作):
        let result = MessageFormatter::format_server_message(&message, Some(1));

        // then (期待する結果):
        assert!(result.contains("You have the potato"));
    }

    #[test]
    fn test_format_potato_held_by_someone_else() {
        // given (前提条件):
        let message = ServerMessage::new_potato_holder(3);

        // when (操作):
        let mine = MessageFormatter::format_server_message(&message, Some(1));
        let unseated = MessageFormatter::format_server_message(&message, None);

        // then (期待する結果):
        assert!(mine.contains("Player 3 has the potato"));
        assert!(unseated.contains("Player 3 has the potato"));
    }

    #[test]
    fn test_format_countdown_and_game_over() {
        // given (前提条件):
        let countdown = ServerMessage::countdown(7);

        // when (操作):
        let countdown = MessageFormatter::format_server_message(&countdown, None);
        let game_over = MessageFormatter::format_server_message(&ServerMessage::GameOver, None);
        let full = MessageFormatter::format_server_message(&ServerMessage::GameFull, None);

        // then (期待する結果):
        assert!(countdown.contains("7s left"));
        assert!(game_over.contains("GAME OVER"));
        assert!(full.contains("game is full"));
    }

    #[test]
    fn test_format_raw_and_binary() {
        // given (前提条件):

        // when (操作):
        let raw = MessageFormatter::format_raw_message("???");
        let binary = MessageFormatter::format_binary_message(1024);

        // then (期待する結果):
        assert!(raw.contains("Received: ???"));
        assert!(binary.contains("1024 bytes"));
    }
}
