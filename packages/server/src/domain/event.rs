//! Outbound events produced by the room.

use super::value_object::SeatIndex;

/// Something the room tells one or all connections.
///
/// Turned into wire messages by the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// The receiving connection now occupies `seat`
    PlayerAssigned { seat: SeatIndex },
    /// All seats are taken
    GameFull,
    /// The potato moved; the index is relayed unvalidated
    NewPotatoHolder { index: i64 },
    /// Seconds remaining in the round
    Countdown { clock_value: u32 },
    GameOver,
}
