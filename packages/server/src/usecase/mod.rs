//! UseCase layer: one struct per room coordinator operation.
//!
//! Every operation that reads or mutates the room holds the room lock for
//! its whole duration, including the pushes it makes, so observers never see
//! a half-applied transition. Lock order is always room, then registry.

mod connect_participant;
mod disconnect_participant;
mod get_room_state;
mod join_game;
mod pass_potato;
mod start_countdown;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::Room;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use get_room_state::GetRoomStateUseCase;
pub use join_game::{JoinGameUseCase, JoinOutcome};
pub use pass_potato::PassPotatoUseCase;
pub use start_countdown::{RoundHandle, StartCountdownUseCase};

/// The one room, shared by all use cases
pub type SharedRoom = Arc<Mutex<Room>>;
