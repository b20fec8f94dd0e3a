//! Feed item matching.
//!
//! Decides whether an inbound channel line should be relayed, and to which
//! destination channels. Only lines from the configured feed source are
//! considered; regex patterns are tried before string patterns.

use regex::Regex;
use tracing::warn;

use crate::store::FeedState;
use crate::utils::irc_eq;

/// Destination channels a line should be relayed to.
///
/// Returns an empty list unless the sender is the trusted feed source
/// (account matched exactly, channel matched under IRC casemapping) and the
/// line matches at least one configured pattern. Regexes are anchored at
/// the start of the line; string patterns match anywhere in it.
pub fn route(
    line: &str,
    sender_account: Option<&str>,
    sender_channel: &str,
    state: &FeedState,
) -> Vec<String> {
    if !is_feed_source(sender_account, sender_channel, state) {
        return Vec::new();
    }

    if matches_any_regex(line, &state.regexpatterns)
        || matches_any_string(line, &state.stringpatterns)
    {
        return state.destination_channels.clone();
    }

    Vec::new()
}

fn is_feed_source(sender_account: Option<&str>, sender_channel: &str, state: &FeedState) -> bool {
    // An unconfigured feed source relays nothing.
    if state.feed_account.is_empty() || state.feed_channel.is_empty() {
        return false;
    }

    sender_account == Some(state.feed_account.as_str())
        && irc_eq(sender_channel, &state.feed_channel)
}

fn matches_any_regex(line: &str, sources: &[String]) -> bool {
    sources.iter().any(|source| match Regex::new(source) {
        // Anchored: the match must begin at the first byte of the line.
        Ok(re) => re.find(line).is_some_and(|m| m.start() == 0),
        Err(e) => {
            warn!(pattern = %source, error = %e, "skipping malformed regex pattern");
            false
        }
    })
}

fn matches_any_string(line: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| line.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FeedState {
        FeedState {
            stringpatterns: vec!["vandalism".into()],
            regexpatterns: vec!["ERROR.*".into()],
            destination_channels: vec!["#ops".into(), "#cvt".into()],
            feed_account: "FeedBot".into(),
            feed_channel: "#feed".into(),
        }
    }

    #[test]
    fn test_regex_match_routes_to_all_destinations() {
        let routed = route("ERROR disk full", Some("FeedBot"), "#feed", &state());
        assert_eq!(routed, vec!["#ops".to_string(), "#cvt".to_string()]);
    }

    #[test]
    fn test_regex_match_ignores_string_set() {
        let mut state = state();
        state.stringpatterns.clear();
        let routed = route("ERROR disk full", Some("FeedBot"), "#feed", &state);
        assert_eq!(routed.len(), 2);
    }

    #[test]
    fn test_string_containment_match() {
        let routed = route(
            "[[Special:Log]] possible vandalism on Main Page",
            Some("FeedBot"),
            "#feed",
            &state(),
        );
        assert_eq!(routed.len(), 2);
    }

    #[test]
    fn test_no_match_routes_nowhere() {
        assert!(route("routine edit", Some("FeedBot"), "#feed", &state()).is_empty());
    }

    #[test]
    fn test_regex_is_anchored_at_line_start() {
        // "ERROR.*" must match from the first byte, not mid-line.
        assert!(route("disk full ERROR", Some("FeedBot"), "#feed", &state()).is_empty());
    }

    #[test]
    fn test_wrong_account_is_not_relayed() {
        assert!(route("ERROR disk full", Some("Impostor"), "#feed", &state()).is_empty());
        assert!(route("ERROR disk full", None, "#feed", &state()).is_empty());
    }

    #[test]
    fn test_account_comparison_is_exact() {
        assert!(route("ERROR disk full", Some("feedbot"), "#feed", &state()).is_empty());
    }

    #[test]
    fn test_wrong_channel_is_not_relayed() {
        assert!(route("ERROR disk full", Some("FeedBot"), "#other", &state()).is_empty());
    }

    #[test]
    fn test_feed_channel_matches_casefolded() {
        let routed = route("ERROR disk full", Some("FeedBot"), "#Feed", &state());
        assert_eq!(routed.len(), 2);
    }

    #[test]
    fn test_unconfigured_feed_source_relays_nothing() {
        let mut state = state();
        state.feed_account.clear();
        assert!(route("ERROR disk full", None, "#feed", &state).is_empty());
    }

    #[test]
    fn test_malformed_regex_is_skipped_not_fatal() {
        let mut state = state();
        state.regexpatterns = vec!["(unclosed".into(), "ERROR.*".into()];
        let routed = route("ERROR disk full", Some("FeedBot"), "#feed", &state);
        assert_eq!(routed.len(), 2);
    }

    #[test]
    fn test_malformed_regex_still_falls_back_to_strings() {
        let mut state = state();
        state.regexpatterns = vec!["(unclosed".into()];
        let routed = route("possible vandalism", Some("FeedBot"), "#feed", &state);
        assert_eq!(routed.len(), 2);
    }
}
