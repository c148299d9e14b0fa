//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use hotpotato_shared::protocol::{ClientMessage, ServerMessage};

use crate::{
    command::parse_input,
    error::ClientError,
    formatter::MessageFormatter,
};

use super::ui::{PROMPT, redisplay_prompt};

/// Run one session: join, then relay typed commands until quit or disconnect
pub async fn run_client_session(url: &str) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to hot potato server!");
    println!("\nCommands: pass <seat>, join, quit. Press Ctrl+C to exit.\n");

    let (mut write, mut read) = ws_stream.split();

    // Ask for a seat straight away, like the browser client does on open
    let join = ClientMessage::NewUser.to_json()?;
    write
        .send(Message::Text(join.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    let mut read_task = tokio::spawn(async move {
        let mut my_seat: Option<usize> = None;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match ServerMessage::parse(text.as_str()) {
                        Ok(server_message) => {
                            if let ServerMessage::PlayerAssignment(payload) = &server_message {
                                my_seat = Some(payload.client_player_index);
                            }
                            if server_message == ServerMessage::GameOver {
                                my_seat = None;
                            }
                            MessageFormatter::format_server_message(&server_message, my_seat)
                        }
                        Err(e) => {
                            tracing::debug!("Unrecognized server message: {}", e);
                            MessageFormatter::format_raw_message(text.as_str())
                        }
                    };
                    print!("{}", formatted);
                    redisplay_prompt();
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt();
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    return true;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return true;
                }
                _ => {}
            }
        }

        true
    });

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let mut write_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            let command = match parse_input(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e);
                    redisplay_prompt();
                    continue;
                }
            };

            // quit
            let Some(message) = command.into_message() else {
                return false;
            };

            let json = match message.to_json() {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                return true;
            }
        }

        false
    });

    // If any one of the tasks completes, abort the other
    let connection_lost = tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            read_result.unwrap_or(true)
        }
        write_result = &mut write_task => {
            read_task.abort();
            write_result.unwrap_or(true)
        }
    };

    if connection_lost {
        return Err(ClientError::ConnectionError("Connection lost".to_string()));
    }

    Ok(())
}
