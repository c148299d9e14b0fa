//! Hot potato party-game server.
//!
//! Seats up to four players over WebSocket, picks a random first potato
//! holder once the room is full, and counts the round down to game over.
//! Static assets for the browser client are served from the same port.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hotpotato-server
//! cargo run --bin hotpotato-server -- --host 0.0.0.0 --port 3000 --round-seconds 10
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use hotpotato_server::{
    domain::{DEFAULT_MAX_TIME, GameConfig, RandomSeatPicker, Room},
    infrastructure::message_pusher::{ConnectionRegistry, WebSocketMessagePusher},
    ui::Server,
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, GetRoomStateUseCase,
        JoinGameUseCase, PassPotatoUseCase, StartCountdownUseCase,
    },
};
use hotpotato_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hotpotato-server")]
#[command(about = "Hot potato party-game server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Directory holding the browser client
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    /// Seconds on the clock when a round starts
    #[arg(long, default_value_t = DEFAULT_MAX_TIME)]
    round_seconds: u32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = GameConfig::new(args.round_seconds);

    // Initialize dependencies in order:
    // 1. Room
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create the room (in-memory, lives for the whole process)
    let room = Arc::new(Mutex::new(Room::new()));

    // 2. Create MessagePusher (WebSocket implementation)
    let registry = Arc::new(Mutex::new(ConnectionRegistry::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(registry));

    // 3. Create UseCases
    let connect_participant_usecase =
        Arc::new(ConnectParticipantUseCase::new(message_pusher.clone()));
    let disconnect_participant_usecase =
        Arc::new(DisconnectParticipantUseCase::new(message_pusher.clone()));
    let pass_potato_usecase = Arc::new(PassPotatoUseCase::new(
        room.clone(),
        message_pusher.clone(),
    ));
    let start_countdown_usecase = Arc::new(StartCountdownUseCase::new(
        room.clone(),
        message_pusher.clone(),
        config,
    ));
    let join_game_usecase = Arc::new(JoinGameUseCase::new(
        room.clone(),
        message_pusher.clone(),
        Arc::new(RandomSeatPicker),
        pass_potato_usecase.clone(),
        start_countdown_usecase,
    ));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(room));

    // 4. Create and run the server
    let server = Server::new(
        connect_participant_usecase,
        disconnect_participant_usecase,
        join_game_usecase,
        pass_potato_usecase,
        get_room_state_usecase,
        args.public_dir,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
