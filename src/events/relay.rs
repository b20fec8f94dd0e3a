//! Passive feed relay.
//!
//! Every non-command channel line is offered to the matcher; on a match
//! the line is forwarded unchanged to every destination channel.

use tracing::debug;

use crate::bot::dispatcher::{AppState, Inbound, MessageSink};
use crate::matcher;

/// Relay a feed item if it matches the configured patterns.
///
/// Requires no privilege: the gate is the feed source itself, not the
/// sender's rights.
pub fn relay_feed_item(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
) -> anyhow::Result<()> {
    let snapshot = state.patterns.snapshot();
    let targets = matcher::route(&msg.text, msg.account.as_deref(), &msg.channel, &snapshot);

    if targets.is_empty() {
        return Ok(());
    }

    debug!(
        channel = %msg.channel,
        destinations = targets.len(),
        "relaying feed item"
    );

    for target in &targets {
        sink.send_privmsg(target, &msg.text)?;
    }

    Ok(())
}
