//! Hot potato party-game server library.
//!
//! Four players connect over WebSocket, get a seat each, pass a shared
//! "potato" around, and race a server-driven countdown.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
