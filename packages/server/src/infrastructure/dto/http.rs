//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Snapshot of the room for `/debug/room`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStateDto {
    pub seat_count: usize,
    pub phase: String,
    /// Last potato holder broadcast in this round
    pub potato_holder: Option<i64>,
    /// Remaining seconds, absent between rounds
    pub countdown: Option<u32>,
}
