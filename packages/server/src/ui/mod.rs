//! Axum server: WebSocket game endpoint, HTTP API, and static assets.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
