//! Bot runtime - the connection loop over the host IRC client.
//!
//! The `irc` crate owns the connection, framing, and registration; this
//! loop maps its message stream onto the dispatcher, one message at a time.

use futures::StreamExt;
use irc::client::prelude::{Capability, Client, Config as IrcConfig};
use irc::client::Sender;
use irc::proto::Command as IrcCommand;
use tracing::{error, info};

use super::dispatcher::{self, AppState, Inbound, MessageSink};
use crate::config::Config;
use crate::utils::{irc_eq, is_channel};

/// Outbound sink backed by the host client's sender.
pub struct IrcSink {
    sender: Sender,
}

impl IrcSink {
    pub fn new(sender: Sender) -> Self {
        Self { sender }
    }
}

impl MessageSink for IrcSink {
    fn send_privmsg(&self, target: &str, text: &str) -> anyhow::Result<()> {
        self.sender.send_privmsg(target, text)?;
        Ok(())
    }
}

/// Host client configuration: connection details from the process config,
/// autojoin channels from the persisted feed state.
fn client_config(config: &Config, state: &AppState) -> IrcConfig {
    let snapshot = state.patterns.snapshot();

    let mut channels = Vec::new();
    if !snapshot.feed_channel.is_empty() {
        channels.push(snapshot.feed_channel.clone());
    }
    for channel in &snapshot.destination_channels {
        if !channels.iter().any(|joined| irc_eq(joined, channel)) {
            channels.push(channel.clone());
        }
    }

    IrcConfig {
        nickname: Some(config.nickname.clone()),
        server: Some(config.server.clone()),
        port: Some(config.port),
        use_tls: Some(config.use_tls),
        channels,
        ..IrcConfig::default()
    }
}

/// Connect and run the bot until the connection closes.
pub async fn run(config: &Config, state: AppState) -> anyhow::Result<()> {
    let mut client = Client::from_config(client_config(config, &state)).await?;

    // Sender accounts arrive as IRCv3 account tags.
    client.send_cap_req(&[Capability::AccountTag])?;
    client.identify()?;

    let mut stream = client.stream()?;
    let sink = IrcSink::new(client.sender());
    info!(server = %config.server, nick = %config.nickname, "connected");

    while let Some(message) = stream.next().await.transpose()? {
        let IrcCommand::PRIVMSG(ref target, ref text) = message.command else {
            continue;
        };

        // Channel messages only; private queries are ignored.
        if !is_channel(target) {
            continue;
        }

        let Some(nick) = message.source_nickname() else {
            continue;
        };

        let inbound = Inbound {
            channel: target.clone(),
            nick: nick.to_string(),
            account: account_tag(&message),
            text: text.clone(),
        };

        if let Err(e) = dispatcher::dispatch(&sink, &inbound, &state) {
            error!(channel = %inbound.channel, error = %e, "handler failed");
        }
    }

    info!("connection closed");
    Ok(())
}

/// The sender's services account from the `account` message tag.
fn account_tag(message: &irc::proto::Message) -> Option<String> {
    message
        .tags
        .as_ref()?
        .iter()
        .find(|tag| tag.0 == "account")
        .and_then(|tag| tag.1.clone())
}
