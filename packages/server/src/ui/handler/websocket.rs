//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::Uri,
    response::Response,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use hotpotato_shared::protocol::ClientMessage;

use crate::{domain::ConnectionId, ui::state::AppState};

use super::static_files::serve_static;

/// Entry point for every request that matches no API route.
///
/// WebSocket upgrades are accepted on any path; everything else is a static
/// asset request.
pub async fn entry_handler(
    State(state): State<Arc<AppState>>,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    uri: Uri,
) -> Response {
    match upgrade {
        Ok(ws) => ws.on_upgrade(move |socket| handle_socket(socket, state)),
        Err(_) => serve_static(&state.public_dir, uri.path()).await,
    }
}

/// Spawns a task that drains the connection's channel into its WebSocket.
///
/// Broadcasts and direct replies are queued on the channel by the
/// `MessagePusher`; this task is the only writer of the socket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Registered only now that the handshake has completed
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_participant_usecase.execute(tx).await;
    tracing::info!("A new client has joined the server: '{}'", connection_id);

    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_frame(&state_clone, connection_id, text.as_str()).await;
                }
                Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => dispatch_frame(&state_clone, connection_id, text).await,
                    Err(e) => {
                        tracing::warn!(
                            "Dropping non UTF-8 binary frame from '{}': {}",
                            connection_id,
                            e
                        );
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state
        .disconnect_participant_usecase
        .execute(connection_id)
        .await;
    tracing::info!("Connection '{}' closed and unregistered", connection_id);
}

/// Decode one text frame and run the matching use case.
///
/// A frame that does not decode is logged and dropped; the connection stays
/// open.
async fn dispatch_frame(state: &AppState, connection_id: ConnectionId, text: &str) {
    tracing::debug!("Received from '{}': {}", connection_id, text);

    let message = match ClientMessage::parse(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Dropping frame from '{}': {}", connection_id, e);
            return;
        }
    };

    match message {
        ClientMessage::NewUser => {
            state.join_game_usecase.execute(connection_id).await;
        }
        ClientMessage::PassPotato(payload) => {
            state
                .pass_potato_usecase
                .execute(payload.new_potato_holder_index)
                .await;
        }
    }
}
