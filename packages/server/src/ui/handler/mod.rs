//! Request handlers.

mod http;
mod static_files;
mod websocket;

pub use http::{debug_room_state, health_check};
pub use websocket::entry_handler;
