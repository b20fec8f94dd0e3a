//! cvtfeed - IRC feed relay bot.
//!
//! Watches a feed channel and relays lines matching admin-managed string
//! or regex patterns to the configured destination channels.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `store` - Persisted pattern/channel state
//! - `matcher` - Relay decision for inbound feed lines
//! - `permissions` - Admin checking by services account
//! - `bot` - Host-framework glue (dispatcher + runtime loop)
//! - `plugins` - Command handlers (extensible)
//! - `events` - Event handlers (passive relay, extensible)
//! - `utils` - Utility functions

mod bot;
mod config;
mod events;
mod matcher;
mod permissions;
mod plugins;
mod store;
mod texts;
mod utils;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bot::dispatcher::AppState;
use config::Config;
use permissions::Permissions;
use store::{JsonFileStore, PatternRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cvtfeed=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting cvtfeed bot...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded successfully");

    if config.admin_accounts.is_empty() {
        info!("No admin accounts configured (ADMIN_ACCOUNTS is empty)");
    } else {
        info!("Admin accounts: {:?}", config.admin_accounts);
    }

    // Load the persisted feed state
    let store = Arc::new(JsonFileStore::new(&config.state_file));
    let patterns = Arc::new(PatternRepository::load(store)?);

    let state = AppState::new(
        patterns,
        Permissions::with_admins(config.admin_accounts.clone()),
        config.command_prefix.clone(),
    );

    // Run the bot until the connection closes or we are interrupted
    tokio::select! {
        result = bot::run(&config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
            Ok(())
        }
    }
}
