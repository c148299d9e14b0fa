//! Code shared between the hot potato server and client.

pub mod logger;
pub mod protocol;
