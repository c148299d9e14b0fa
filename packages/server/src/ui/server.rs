//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, GetRoomStateUseCase,
    JoinGameUseCase, PassPotatoUseCase,
};

use super::{
    handler::{debug_room_state, entry_handler, health_check},
    signal::shutdown_signal,
    state::AppState,
};

/// Hot potato game server
///
/// WebSocket upgrades are accepted on any path of the listening port; every
/// other request that matches no API route is answered from the public
/// directory.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_participant_usecase,
///     disconnect_participant_usecase,
///     join_game_usecase,
///     pass_potato_usecase,
///     get_room_state_usecase,
///     PathBuf::from("public"),
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    join_game_usecase: Arc<JoinGameUseCase>,
    pass_potato_usecase: Arc<PassPotatoUseCase>,
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
    public_dir: PathBuf,
}

impl Server {
    pub fn new(
        connect_participant_usecase: Arc<ConnectParticipantUseCase>,
        disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
        join_game_usecase: Arc<JoinGameUseCase>,
        pass_potato_usecase: Arc<PassPotatoUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
        public_dir: PathBuf,
    ) -> Self {
        Self {
            connect_participant_usecase,
            disconnect_participant_usecase,
            join_game_usecase,
            pass_potato_usecase,
            get_room_state_usecase,
            public_dir,
        }
    }

    /// Build the router without binding a socket
    pub fn into_router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_participant_usecase: self.connect_participant_usecase,
            disconnect_participant_usecase: self.disconnect_participant_usecase,
            join_game_usecase: self.join_game_usecase,
            pass_potato_usecase: self.pass_potato_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
            public_dir: self.public_dir,
        });

        Router::new()
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/debug/room", get(debug_room_state))
            // WebSocket upgrade or static asset
            .fallback(entry_handler)
            .with_state(app_state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the game server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let public_dir = self.public_dir.clone();
        let app = self.into_router();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Hot potato server listening on {}", listener.local_addr()?);
        tracing::info!("Play at: http://{}/", bind_addr);
        tracing::info!("Serving static files from {}", public_dir.display());
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
