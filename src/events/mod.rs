//! Event handler system.
//!
//! Add new event handlers by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_event;` below
//! 3. Calling the handler from `on_channel_message()`

pub mod relay;

use crate::bot::dispatcher::{AppState, Inbound, MessageSink};

/// Run the event handlers for a non-command channel message.
pub fn on_channel_message(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
) -> anyhow::Result<()> {
    relay::relay_feed_item(sink, msg, state)
}
