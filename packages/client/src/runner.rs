//! Client execution logic.

use super::session::run_client_session;

/// Run the player client until the user quits or the connection drops.
///
/// There is no reconnection: a dropped connection loses the seat anyway.
pub async fn run_client(url: String) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Connecting to {}", url);

    run_client_session(&url).await?;
    tracing::info!("Client session ended normally");

    Ok(())
}
