//! Parsing of typed input lines into player commands.

use hotpotato_shared::protocol::ClientMessage;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ask for a seat (`NEW_USER`)
    Join,
    /// Hand the potato to a seat (`PASS_POTATO`)
    Pass(i64),
    Quit,
}

impl Command {
    /// Message to send, `None` for local-only commands
    pub fn into_message(self) -> Option<ClientMessage> {
        match self {
            Command::Join => Some(ClientMessage::NewUser),
            Command::Pass(index) => Some(ClientMessage::pass_potato(index)),
            Command::Quit => None,
        }
    }
}

/// Parse one input line.
///
/// A bare number is shorthand for `pass <number>`.
pub fn parse_input(line: &str) -> Result<Command, ClientError> {
    let mut words = line.split_whitespace();
    let invalid = || ClientError::InvalidCommand(line.trim().to_string());

    let command = match words.next().ok_or_else(invalid)? {
        "join" => Command::Join,
        "quit" | "exit" => Command::Quit,
        "pass" => {
            let index = words.next().ok_or_else(invalid)?;
            Command::Pass(index.parse().map_err(|_| invalid())?)
        }
        other => Command::Pass(other.parse().map_err(|_| invalid())?),
    };

    if words.next().is_some() {
        return Err(invalid());
    }
    Ok(command)
}
