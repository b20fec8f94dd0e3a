//! Message dispatcher.
//!
//! Maps inbound channel messages to the command handlers or the passive
//! relay. The host framework delivers one message at a time; a handler
//! runs to completion before the next message is dispatched.

use std::sync::Arc;

use crate::events;
use crate::permissions::Permissions;
use crate::plugins::{self, Command};
use crate::store::PatternRepository;

/// Outbound message sink.
///
/// The production implementation wraps the host client's sender; tests use
/// a recording sink. Sending is fire-and-forget from the handler's point of
/// view - delivery is the host framework's problem.
pub trait MessageSink: Send + Sync {
    /// Send a line to a channel or nick.
    fn send_privmsg(&self, target: &str, text: &str) -> anyhow::Result<()>;
}

/// A channel message as delivered by the host framework.
#[derive(Debug, Clone)]
pub struct Inbound {
    /// Channel the message was sent to.
    pub channel: String,
    /// Nick of the sender.
    pub nick: String,
    /// Services account the sender is logged in to, if any.
    pub account: Option<String>,
    /// The message body.
    pub text: String,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Pattern and destination-channel repository.
    pub patterns: Arc<PatternRepository>,

    /// Permission checker for admin commands.
    pub permissions: Permissions,

    /// Command prefix (e.g. `.` for `.cvtpattern`).
    pub prefix: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new(patterns: Arc<PatternRepository>, permissions: Permissions, prefix: String) -> Self {
        Self {
            patterns,
            permissions,
            prefix,
        }
    }
}

/// Route one inbound channel message.
///
/// Command-shaped lines go to the command handlers; everything else is
/// offered to the passive relay.
pub fn dispatch(sink: &dyn MessageSink, msg: &Inbound, state: &AppState) -> anyhow::Result<()> {
    if let Some(command) = Command::parse(&msg.text, &state.prefix) {
        plugins::handle_command(sink, msg, state, command)
    } else {
        events::on_channel_message(sink, msg, state)
    }
}

/// Send a reply addressed to the message's sender (`nick: text`).
pub fn reply(sink: &dyn MessageSink, msg: &Inbound, text: &str) -> anyhow::Result<()> {
    sink.send_privmsg(&msg.channel, &format!("{}: {}", msg.nick, text))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared test doubles for handler tests.

    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::{AppState, Inbound, MessageSink};
    use crate::permissions::Permissions;
    use crate::store::{FeedState, MemoryStore, PatternRepository};

    /// Sink that records outbound messages for assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// `(target, text)` pairs in send order.
        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().clone()
        }
    }

    impl MessageSink for RecordingSink {
        fn send_privmsg(&self, target: &str, text: &str) -> anyhow::Result<()> {
            self.sent.lock().push((target.to_string(), text.to_string()));
            Ok(())
        }
    }

    /// App state over an in-memory store, with "Operator" as the only admin.
    pub fn app_state(seed: FeedState) -> (Arc<MemoryStore>, AppState) {
        let store = Arc::new(MemoryStore::with_state(seed));
        let patterns = Arc::new(PatternRepository::load(store.clone()).unwrap());
        let state = AppState::new(
            patterns,
            Permissions::with_admins(vec!["Operator".into()]),
            ".".to_string(),
        );
        (store, state)
    }

    /// A channel message from the given sender.
    pub fn inbound(channel: &str, nick: &str, account: Option<&str>, text: &str) -> Inbound {
        Inbound {
            channel: channel.to_string(),
            nick: nick.to_string(),
            account: account.map(String::from),
            text: text.to_string(),
        }
    }
}
