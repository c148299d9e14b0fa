//! Room entity: seats, potato, and the round clock.

use super::{
    countdown::{self, TickOutcome},
    error::RoomError,
    value_object::SeatIndex,
};

/// Number of seats in a room.
pub const ROOM_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPhase {
    /// Fewer than four seats filled, no clock running
    WaitingForPlayers,
    /// All seats filled and the countdown is running
    RoundActive,
}

impl RoomPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomPhase::WaitingForPlayers => "WAITING_FOR_PLAYERS",
            RoomPhase::RoundActive => "ROUND_ACTIVE",
        }
    }
}

/// Outcome of asking the room for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatClaim {
    Seated {
        seat: SeatIndex,
        /// True when this claim filled the last seat
        room_filled: bool,
    },
    Full,
}

/// The single game room.
///
/// Seats are handed out in arrival order and are never reclaimed until the
/// round ends and the room resets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Room {
    seat_count: usize,
    /// Last holder broadcast; diagnostic only
    potato_holder: Option<i64>,
    countdown: Option<u32>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    pub fn potato_holder(&self) -> Option<i64> {
        self.potato_holder
    }

    /// Remaining seconds, `None` when no round is running
    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    pub fn phase(&self) -> RoomPhase {
        if self.countdown.is_some() {
            RoomPhase::RoundActive
        } else {
            RoomPhase::WaitingForPlayers
        }
    }

    /// Take the next free seat, if any.
    pub fn claim_seat(&mut self) -> SeatClaim {
        if self.seat_count >= ROOM_CAPACITY {
            return SeatClaim::Full;
        }

        let seat = SeatIndex::new(self.seat_count);
        self.seat_count += 1;

        SeatClaim::Seated {
            seat,
            room_filled: self.seat_count == ROOM_CAPACITY,
        }
    }

    pub fn record_potato_holder(&mut self, index: i64) {
        self.potato_holder = Some(index);
    }

    /// Put `max_time` on the clock.
    pub fn begin_countdown(&mut self, max_time: u32) -> Result<(), RoomError> {
        if self.countdown.is_some() {
            return Err(RoomError::RoundAlreadyActive);
        }
        self.countdown = Some(max_time);
        Ok(())
    }

    /// Advance the clock by one tick.
    ///
    /// Returns `None` when no round is running. On the final tick the room
    /// goes back to its initial empty state.
    pub fn advance_countdown(&mut self) -> Option<TickOutcome> {
        let remaining = self.countdown?;
        let outcome = countdown::tick(remaining);

        if outcome.stop {
            self.reset();
        } else {
            self.countdown = Some(outcome.next);
        }

        Some(outcome)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
