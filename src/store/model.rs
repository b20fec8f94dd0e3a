//! Persisted feed configuration model.

use serde::{Deserialize, Serialize};

/// Which pattern set a `cvtpattern` command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Literal substring patterns (case-sensitive).
    String,
    /// Regular expression patterns, anchored at the start of the line.
    Regex,
}

impl PatternKind {
    /// Parse the set-kind token of a `cvtpattern` command.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "string" => Some(Self::String),
            "regex" => Some(Self::Regex),
            _ => None,
        }
    }

    /// Plural noun used in "none configured" replies.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::String => "strings",
            Self::Regex => "regex patterns",
        }
    }
}

/// The persisted feed configuration.
///
/// Field names double as the on-disk keys, matching the configuration
/// options the bot recognizes: three pattern/channel lists and the trusted
/// feed source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    /// Literal substrings looked for in feed items.
    #[serde(default)]
    pub stringpatterns: Vec<String>,

    /// Regex sources looked for in feed items.
    #[serde(default)]
    pub regexpatterns: Vec<String>,

    /// Channels matching feed items are relayed to.
    #[serde(default)]
    pub destination_channels: Vec<String>,

    /// Services account of the bot that posts feed items.
    #[serde(default)]
    pub feed_account: String,

    /// Channel the feed items are posted in.
    #[serde(default)]
    pub feed_channel: String,
}
