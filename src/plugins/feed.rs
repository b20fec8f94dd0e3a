//! Feed toggle command handlers.
//!
//! `cvtfeed on|off` - enable or disable the feed for the issuing channel.

use tracing::info;

use crate::bot::dispatcher::{reply, AppState, Inbound, MessageSink};
use crate::texts;

/// Handle `cvtfeed`.
///
/// The toggle is always scoped to the channel the command was issued in,
/// never an arbitrary target.
pub fn feed_command(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    args: &str,
) -> anyhow::Result<()> {
    let tokens: Vec<&str> = args.split_whitespace().collect();

    match tokens.as_slice() {
        ["on"] => {
            if state.patterns.enable_channel(&msg.channel)? {
                info!(channel = %msg.channel, "feed enabled");
                sink.send_privmsg(&msg.channel, texts::FEED_ENABLED)
            } else {
                sink.send_privmsg(&msg.channel, texts::FEED_ALREADY_ENABLED)
            }
        }
        ["off"] => {
            if state.patterns.disable_channel(&msg.channel)? {
                info!(channel = %msg.channel, "feed disabled");
                sink.send_privmsg(&msg.channel, texts::FEED_DISABLED)
            } else {
                sink.send_privmsg(&msg.channel, texts::FEED_ALREADY_DISABLED)
            }
        }
        _ => reply(sink, msg, texts::HUH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::dispatcher::testing::{app_state, inbound, RecordingSink};
    use crate::store::FeedState;

    fn admin_msg(channel: &str, text: &str) -> Inbound {
        inbound(channel, "op", Some("Operator"), text)
    }

    #[test]
    fn test_on_enables_issuing_channel() {
        let (store, state) = app_state(FeedState::default());
        let sink = RecordingSink::new();

        feed_command(&sink, &admin_msg("#ops", ""), &state, "on").unwrap();

        assert_eq!(sink.sent()[0].1, texts::FEED_ENABLED);
        assert_eq!(state.patterns.destination_channels(), vec!["#ops".to_string()]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_on_when_already_enabled() {
        let (store, state) = app_state(FeedState {
            destination_channels: vec!["#ops".into()],
            ..FeedState::default()
        });
        let sink = RecordingSink::new();

        feed_command(&sink, &admin_msg("#Ops", ""), &state, "on").unwrap();

        assert_eq!(sink.sent()[0].1, texts::FEED_ALREADY_ENABLED);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_off_disables_issuing_channel() {
        let (store, state) = app_state(FeedState {
            destination_channels: vec!["#ops".into(), "#cvt".into()],
            ..FeedState::default()
        });
        let sink = RecordingSink::new();

        feed_command(&sink, &admin_msg("#ops", ""), &state, "off").unwrap();

        assert_eq!(sink.sent()[0].1, texts::FEED_DISABLED);
        assert_eq!(state.patterns.destination_channels(), vec!["#cvt".to_string()]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_off_when_not_enabled() {
        let (store, state) = app_state(FeedState::default());
        let sink = RecordingSink::new();

        feed_command(&sink, &admin_msg("#ops", ""), &state, "off").unwrap();

        assert_eq!(sink.sent()[0].1, texts::FEED_ALREADY_DISABLED);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_missing_argument_is_not_understood() {
        let (_, state) = app_state(FeedState::default());
        let sink = RecordingSink::new();

        feed_command(&sink, &admin_msg("#ops", ""), &state, "").unwrap();

        assert!(sink.sent()[0].1.contains("could not figure out"));
    }
}
