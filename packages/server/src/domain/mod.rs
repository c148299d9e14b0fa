//! Domain layer: room state, countdown transitions, and the interfaces the
//! use cases depend on.

pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod room;
pub mod seat_picker;
pub mod value_object;

pub use config::{DEFAULT_MAX_TIME, DEFAULT_TICK_INTERVAL, GameConfig};
pub use countdown::TickOutcome;
pub use error::{MessagePushError, RoomError};
pub use event::RoomEvent;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use room::{ROOM_CAPACITY, Room, RoomPhase, SeatClaim};
pub use seat_picker::{FixedSeatPicker, RandomSeatPicker, SeatPicker};
pub use value_object::{ConnectionId, SeatIndex};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
