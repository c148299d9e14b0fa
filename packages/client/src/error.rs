//! Error types for the player client.

use thiserror::Error;

use hotpotato_shared::protocol::ProtocolError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not reach the server, or the connection dropped
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The typed line is not a known command
    #[error("Unknown command '{0}' (try: pass <seat>, join, quit)")]
    InvalidCommand(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
