//! Countdown timer transition.
//!
//! The timer is modeled as a pure step function so the timing policy can be
//! tested without a clock. The use case layer drives it from a
//! `tokio::time::interval`.

use super::event::RoomEvent;

/// Result of one timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Remaining value after this tick
    pub next: u32,
    /// Events to broadcast, in order
    pub events: Vec<RoomEvent>,
    /// Whether the timer must stop
    pub stop: bool,
}

/// Apply one tick to the remaining value.
///
/// While `remaining > 0` the current value is broadcast and then decremented,
/// so a round started at 30 broadcasts 30 on the first tick and 1 on the
/// thirtieth. The tick that finds zero ends the round.
pub fn tick(remaining: u32) -> TickOutcome {
    if remaining > 0 {
        TickOutcome {
            next: remaining - 1,
            events: vec![RoomEvent::Countdown {
                clock_value: remaining,
            }],
            stop: false,
        }
    } else {
        TickOutcome {
            next: 0,
            events: vec![RoomEvent::GameOver],
            stop: true,
        }
    }
}
