//! Pattern command handlers.
//!
//! `cvtpattern list|add|del` - manage the string and regex pattern sets.

use regex::Regex;
use tracing::{info, warn};

use crate::bot::dispatcher::{reply, AppState, Inbound, MessageSink};
use crate::store::PatternKind;
use crate::texts;

/// Handle `cvtpattern`.
///
/// Usage:
/// - `cvtpattern list string|regex`
/// - `cvtpattern add string|regex <value>`
/// - `cvtpattern del string|regex <value>`
pub fn pattern_command(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    args: &str,
) -> anyhow::Result<()> {
    let tokens: Vec<&str> = args.split_whitespace().collect();

    match tokens.as_slice() {
        ["list", kind] => list_patterns(sink, msg, state, kind),
        ["add", kind, value] => add_pattern(sink, msg, state, kind, value),
        ["del", kind, value] => del_pattern(sink, msg, state, kind, value),
        _ => reply(sink, msg, texts::HUH),
    }
}

fn list_patterns(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    kind: &str,
) -> anyhow::Result<()> {
    let Some(kind) = PatternKind::parse(kind) else {
        return reply(sink, msg, texts::INVALID_DISPLAY);
    };

    let patterns = state.patterns.patterns(kind);
    if patterns.is_empty() {
        return reply(sink, msg, &texts::PATTERNS_NONE.replace("{kind}", kind.plural()));
    }

    sink.send_privmsg(
        &msg.channel,
        &texts::PATTERN_LIST.replace("{patterns}", &patterns.join(", ")),
    )
}

fn add_pattern(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    kind: &str,
    value: &str,
) -> anyhow::Result<()> {
    let Some(kind) = PatternKind::parse(kind) else {
        return reply(sink, msg, &texts::INVALID_SET_KIND.replace("{action}", "adding"));
    };

    // Regex sources must compile before they enter the set.
    if kind == PatternKind::Regex
        && let Err(e) = Regex::new(value)
    {
        warn!(pattern = value, error = %e, "rejecting invalid regex pattern");
        return reply(sink, msg, &texts::INVALID_REGEX.replace("{value}", value));
    }

    state.patterns.add_pattern(kind, value)?;
    info!(kind = ?kind, value, "pattern added");

    reply(sink, msg, &texts::PATTERN_ADDED.replace("{value}", value))
}

fn del_pattern(
    sink: &dyn MessageSink,
    msg: &Inbound,
    state: &AppState,
    kind: &str,
    value: &str,
) -> anyhow::Result<()> {
    let Some(kind) = PatternKind::parse(kind) else {
        return reply(sink, msg, &texts::INVALID_SET_KIND.replace("{action}", "deleting"));
    };

    if !state.patterns.remove_pattern(kind, value)? {
        let not_found = match kind {
            PatternKind::String => texts::NO_STRING_PATTERN,
            PatternKind::Regex => texts::NO_REGEX_PATTERN,
        };
        return reply(sink, msg, &not_found.replace("{value}", value));
    }

    info!(kind = ?kind, value, "pattern deleted");
    reply(sink, msg, &texts::PATTERN_DELETED.replace("{value}", value))
}
