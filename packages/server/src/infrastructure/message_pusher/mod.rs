//! メッセージ送信（通知）の実装
//!
//! - `registry`: the set of live connections
//! - `websocket`: `MessagePusher` over per-connection WebSocket writer channels

pub mod registry;
pub mod websocket;

pub use registry::ConnectionRegistry;
pub use websocket::WebSocketMessagePusher;
