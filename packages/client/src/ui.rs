//! UI utilities for the client.

use std::io::Write;

pub const PROMPT: &str = "potato> ";

/// Redisplay the prompt after printing a server message
pub fn redisplay_prompt() {
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}
