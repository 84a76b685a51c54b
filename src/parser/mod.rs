//! Parsers for the control tool's status dumps
//!
//! All parsers share [`extract_record`], a stateless line tokenizer. The state
//! machines (cursor, section flags) live in the per-entity modules. None of them
//! can fail: a field that does not parse keeps its zero value.

pub mod audio_client;
pub mod card;
pub mod card_device;

#[cfg(test)]
pub(crate) mod fixtures;

use once_cell::sync::Lazy;
use regex::Regex;

pub use audio_client::parse_audio_clients;
pub use card::parse_cards;
pub use card_device::parse_card_devices;

static RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<key>(?:\*\s*)?[^:=]+?)\s*[:=]\s*(?P<value>.*)$").expect("valid record pattern")
});

static QUOTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:<|")|(?:>|")$"#).expect("valid quote pattern"));

static ATTACHMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<index>[0-9]+)\s*<(?P<name>[^>]+)>").expect("valid attachment pattern"));

/// One `key: value` or `key = value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Key as written, including a leading `*` default marker if present
    pub key: &'a str,
    /// Remainder of the line, possibly empty
    pub value: &'a str,
}

impl<'a> Record<'a> {
    /// Whether the key carries the `*` default marker
    pub fn is_default_marked(&self) -> bool {
        self.key.starts_with('*')
    }

    /// Key with the default marker stripped
    pub fn bare_key(&self) -> &'a str {
        self.key.trim_start_matches('*').trim_start()
    }
}

/// Split a line into key and value
///
/// Returns `None` for blank lines and free-form continuation lines.
pub fn extract_record(line: &str) -> Option<Record<'_>> {
    let captures = RECORD_RE.captures(line.trim())?;
    let key = captures.name("key")?.as_str();
    let value = captures.name("value").map_or("", |m| m.as_str());

    Some(Record { key, value })
}

/// Strip one pair of surrounding `<>` or `""`
pub fn unquote(value: &str) -> String {
    QUOTES_RE.replace_all(value, "").into_owned()
}

/// Parse an unsigned integer, zero on failure
pub(crate) fn parse_u64(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

/// Parse `N <name>`, the format used for card and device references
pub(crate) fn parse_attachment(value: &str) -> Option<(u64, &str)> {
    let captures = ATTACHMENT_RE.captures(value)?;
    let index = parse_u64(captures.name("index")?.as_str());
    let name = captures.name("name")?.as_str();

    Some((index, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_colon_record() {
        let record = extract_record("\tname: <alsa_card.pci-0000_00_1f.3>").unwrap();
        assert_eq!(record.key, "name");
        assert_eq!(record.value, "<alsa_card.pci-0000_00_1f.3>");
        assert!(!record.is_default_marked());
    }

    #[test]
    fn test_extract_equals_record() {
        let record = extract_record("  device.bus = \"bluetooth\"").unwrap();
        assert_eq!(record.key, "device.bus");
        assert_eq!(record.value, "\"bluetooth\"");
    }

    #[test]
    fn test_extract_default_marker() {
        let record = extract_record("  * index: 3").unwrap();
        assert_eq!(record.key, "* index");
        assert_eq!(record.bare_key(), "index");
        assert_eq!(record.value, "3");
        assert!(record.is_default_marked());
    }

    #[test]
    fn test_extract_key_with_spaces_and_empty_value() {
        let record = extract_record("active profile: <a2dp_sink_sbc>").unwrap();
        assert_eq!(record.key, "active profile");

        let record = extract_record("\tprofiles:").unwrap();
        assert_eq!(record.key, "profiles");
        assert_eq!(record.value, "");
    }

    #[test]
    fn test_extract_splits_on_first_separator() {
        let record = extract_record("volume: front-left: 49151 /  75% / -7.50 dB").unwrap();
        assert_eq!(record.key, "volume");
        assert_eq!(record.value, "front-left: 49151 /  75% / -7.50 dB");
    }

    #[test]
    fn test_extract_no_match() {
        assert!(extract_record("").is_none());
        assert!(extract_record("    ").is_none());
        assert!(extract_record("2 card(s) available.").is_none());
        assert!(extract_record("        balance 0.00").is_none());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("<module-alsa-card.c>"), "module-alsa-card.c");
        assert_eq!(unquote("\"Built-in Audio\""), "Built-in Audio");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("a<b>c"), "a<b>c");
    }

    #[test]
    fn test_parse_attachment() {
        assert_eq!(parse_attachment("1 <alsa_output.pci.analog-stereo>"), Some((1, "alsa_output.pci.analog-stereo")));
        assert_eq!(parse_attachment("12 <Firefox>"), Some((12, "Firefox")));
        assert_eq!(parse_attachment("n/a"), None);
    }

    #[test]
    fn test_parse_u64_defaults_to_zero() {
        assert_eq!(parse_u64("42"), 42);
        assert_eq!(parse_u64(" 7 "), 7);
        assert_eq!(parse_u64("abc"), 0);
        assert_eq!(parse_u64("-1"), 0);
    }
}
