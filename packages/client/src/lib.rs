//! Terminal player client for the hot potato server.

pub mod command;
pub mod error;
pub mod formatter;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
