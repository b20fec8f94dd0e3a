//! Plugin system for command handlers.
//!
//! Add new commands by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding a variant to [`Command`] and a branch to `handle_command()`

pub mod feed;
pub mod patterns;

use crate::bot::dispatcher::{reply, AppState, Inbound, MessageSink};
use crate::texts;

/// All bot commands, with their raw argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `cvtpattern` - manage the pattern sets.
    Pattern(String),
    /// `cvtfeed` - toggle the feed for the issuing channel.
    Feed(String),
}

impl Command {
    /// Parse a channel line into a bot command, if it is one.
    ///
    /// A command line starts with the configured prefix immediately
    /// followed by a known command name; everything after the name is the
    /// argument string.
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let text = text.strip_prefix(prefix)?;
        let (name, args) = match text.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (text, ""),
        };

        match name {
            "cvtpattern" => Some(Self::Pattern(args.to_string())),
            "cvtfeed" => Some(Self::Feed(args.to_string())),
            _ => None,
        }
    }
}

/// Dispatch a parsed command to its handler.
///
/// Both commands mutate configuration, so both are gated on the sender
/// being an admin; the gate runs before any argument is looked at.
pub fn handle_command(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    command: Command,
) -> anyhow::Result<()> {
    if !state.permissions.is_admin(msg.account.as_deref()) {
        let denial = match command {
            Command::Pattern(_) => texts::ADMIN_ONLY_PATTERNS,
            Command::Feed(_) => texts::ADMIN_ONLY_FEED,
        };
        return reply(sink, msg, denial);
    }

    match command {
        Command::Pattern(args) => patterns::pattern_command(sink, msg, state, &args),
        Command::Feed(args) => feed::feed_command(sink, msg, state, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::dispatcher::testing::{app_state, inbound, RecordingSink};
    use crate::store::FeedState;

    #[test]
    fn test_parse_recognizes_commands() {
        assert_eq!(
            Command::parse(".cvtpattern list string", "."),
            Some(Command::Pattern("list string".into()))
        );
        assert_eq!(
            Command::parse(".cvtfeed on", "."),
            Some(Command::Feed("on".into()))
        );
    }

    #[test]
    fn test_parse_without_args() {
        assert_eq!(Command::parse(".cvtfeed", "."), Some(Command::Feed(String::new())));
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert_eq!(Command::parse("cvtfeed on", "."), None);
        assert_eq!(Command::parse(".unknown on", "."), None);
        assert_eq!(Command::parse("ERROR disk full", "."), None);
    }

    #[test]
    fn test_parse_respects_configured_prefix() {
        assert_eq!(
            Command::parse("!cvtfeed off", "!"),
            Some(Command::Feed("off".into()))
        );
        assert_eq!(Command::parse(".cvtfeed off", "!"), None);
    }

    #[test]
    fn test_non_admin_is_denied() {
        let (store, state) = app_state(FeedState::default());
        let sink = RecordingSink::new();
        let msg = inbound("#ops", "rando", Some("rando"), ".cvtpattern add string x");

        handle_command(&sink, &msg, &state, Command::parse(&msg.text, ".").unwrap()).unwrap();

        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.contains("admins"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_unidentified_sender_is_denied() {
        let (_, state) = app_state(FeedState::default());
        let sink = RecordingSink::new();
        let msg = inbound("#ops", "rando", None, ".cvtfeed on");

        handle_command(&sink, &msg, &state, Command::parse(&msg.text, ".").unwrap()).unwrap();

        assert!(sink.sent()[0].1.contains("admins"));
    }
}
