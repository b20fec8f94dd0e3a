//! User-visible reply texts.
//!
//! Centralized so handlers and tests agree on wording. Placeholders in
//! curly braces are filled with `str::replace` at the call site.

pub const PATTERN_ADDED: &str = "Successfully added pattern: {value}";
pub const PATTERN_DELETED: &str = "Successfully deleted pattern: {value}";
pub const PATTERN_LIST: &str = "Patterns: {patterns}";
pub const PATTERNS_NONE: &str = "No {kind} listed in the patterns list.";
pub const NO_STRING_PATTERN: &str = "No matching string pattern found for: {value}";
pub const NO_REGEX_PATTERN: &str = "No matching regex pattern found for: {value}";
pub const INVALID_SET_KIND: &str =
    "Invalid format for {action} a pattern. Try: cvtpattern add (string|regex) vandalism";
pub const INVALID_DISPLAY: &str = "Invalid input for displaying patterns.";
pub const INVALID_REGEX: &str = "That is not a valid regex pattern: {value}";
pub const HUH: &str = "I could not figure out what you wanted to do.";

pub const FEED_ENABLED: &str = "Successfully enabled the feed for this channel";
pub const FEED_ALREADY_ENABLED: &str = "The feed is already enabled for this channel";
pub const FEED_DISABLED: &str = "Successfully disabled the feed for this channel";
pub const FEED_ALREADY_DISABLED: &str = "The feed is already disabled for this channel";

pub const ADMIN_ONLY_PATTERNS: &str = "Patterns can only be managed by admins.";
pub const ADMIN_ONLY_FEED: &str = "The feed can only be enabled/disabled by admins.";
