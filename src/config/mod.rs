//! Configuration module for the cvtfeed bot.
//!
//! Loads configuration from environment variables. Connection-level
//! settings live here; the mutable feed state (patterns, destination
//! channels, feed source) lives in the persisted store.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IRC server host.
    pub server: String,
    pub port: u16,
    pub use_tls: bool,

    /// Nickname to register with.
    pub nickname: String,

    /// Command prefix (e.g. `.` for `.cvtpattern`).
    pub command_prefix: String,

    /// Services accounts allowed to manage patterns and the feed toggle
    /// (comma-separated).
    pub admin_accounts: Vec<String>,

    /// Path of the persisted feed state.
    pub state_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("IRC_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(6697);

        let use_tls = env::var("IRC_USE_TLS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        // Parse admin accounts
        let admin_accounts = env::var("ADMIN_ACCOUNTS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            server: env::var("IRC_SERVER").expect("IRC_SERVER must be set"),
            port,
            use_tls,
            nickname: env::var("IRC_NICKNAME").unwrap_or_else(|_| "cvtfeed".to_string()),
            command_prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| ".".to_string()),
            admin_accounts,
            state_file: env::var("STATE_FILE")
                .unwrap_or_else(|_| "cvtfeed.json".to_string())
                .into(),
        }
    }
}
