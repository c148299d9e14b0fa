//! Domain error types.

use thiserror::Error;

/// Errors raised while pushing messages to connections
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    /// No connection with this id is registered
    #[error("Connection '{0}' not found")]
    ClientNotFound(String),

    /// The connection is registered but its writer has gone away
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// The outbound message could not be serialized
    #[error("Failed to encode message: {0}")]
    Encode(String),
}

/// Room state transition errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    /// A countdown is already running for this room
    #[error("A round is already active")]
    RoundAlreadyActive,
}
