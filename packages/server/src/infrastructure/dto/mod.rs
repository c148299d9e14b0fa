//! Data Transfer Objects.
//!
//! - `conversion`: domain events → WebSocket wire messages
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
