//! Value objects for the game domain.

use std::fmt;

use uuid::Uuid;

/// Opaque handle for one accepted WebSocket connection.
///
/// Seats are not stored on the handle; a connection may hold zero, one, or
/// (by re-sending `NEW_USER`) several seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh random connection id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based seat position, assigned in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatIndex(usize);

impl SeatIndex {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// The seat as a potato-holder index, the type carried on the wire.
    pub fn as_holder_index(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
