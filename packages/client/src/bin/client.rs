//! Terminal player client for the hot potato server.
//!
//! Connects, asks for a seat, prints every server message, and lets you pass
//! the potato by typing `pass <seat>`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hotpotato-client
//! cargo run --bin hotpotato-client -- --url ws://127.0.0.1:3000/
//! ```

use clap::Parser;

use hotpotato_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hotpotato-client")]
#[command(about = "Terminal player client for the hot potato server", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = hotpotato_client::run_client(args.url).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
