//! crates/klio-logger/src/header.rs
//! Encoding of the control-sequence header that precedes every line.
//!
//! A header is three APC-style segments, each `ESC _klio_<field> <json> ESC \`,
//! in the fixed order level, tags, mode. The values are minified JSON so the
//! consumer can decode them without a bespoke grammar. The line ends with the
//! payload-free reset segment and a newline.

use crate::level::{Level, Mode};

/// Marker written after the content of every line.
pub const RESET_SEQUENCE: &str = "\x1b_klio_reset\x1b\\";

const DEFAULT_LEVEL_JSON: &str = "\"info\"";
const DEFAULT_TAGS_JSON: &str = "[]";
const DEFAULT_MODE_JSON: &str = "\"line\"";

const NEEDS_ESCAPE: &[char] = &['<', '>', '&', '\u{2028}', '\u{2029}'];

/// Builds the header for the given configuration.
///
/// The result depends on nothing but its arguments. Tag order is kept as
/// given and an empty tag list encodes as `[]`.
///
/// # Examples
///
/// ```
/// use klio_logger::{encode_header, Level, Mode};
///
/// let header = encode_header(Level::Warn, &["build".to_owned()], Mode::Line);
/// assert_eq!(
///     header,
///     "\x1b_klio_log_level \"warn\"\x1b\\\x1b_klio_tags [\"build\"]\x1b\\\x1b_klio_mode \"line\"\x1b\\"
/// );
/// ```
#[must_use]
pub fn encode_header<S>(level: Level, tags: &[S], mode: Mode) -> String
where
    S: AsRef<str>,
{
    let level = encode_name(level.as_str(), DEFAULT_LEVEL_JSON);
    let tags = encode_tags(tags);
    let mode = encode_name(mode.as_str(), DEFAULT_MODE_JSON);

    format!(
        "\x1b_klio_log_level {level}\x1b\\\x1b_klio_tags {tags}\x1b\\\x1b_klio_mode {mode}\x1b\\"
    )
}

fn encode_name(name: &str, fallback: &str) -> String {
    json_or(serde_json::to_string(name), fallback)
}

fn encode_tags<S>(tags: &[S]) -> String
where
    S: AsRef<str>,
{
    let tags: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    json_or(serde_json::to_string(&tags), DEFAULT_TAGS_JSON)
}

/// Escaped encoding, or the default encoding when serialization failed.
fn json_or(encoded: serde_json::Result<String>, fallback: &str) -> String {
    encoded.map_or_else(|_| fallback.to_owned(), escape_markup)
}

/// Rewrites markup-sensitive characters as `\uXXXX` escapes.
///
/// Klio's reference encoder escapes these inside strings; doing the same keeps
/// headers byte-identical across implementations. The characters can only
/// occur inside JSON strings here, so a plain substitution is safe.
fn escape_markup(json: String) -> String {
    if !json.contains(NEEDS_ESCAPE) {
        return json;
    }

    let mut escaped = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Assembles one complete output line: header, content, reset, newline.
pub(crate) fn compose_line(header: &str, content: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(header.len() + content.len() + RESET_SEQUENCE.len() + 1);
    line.extend_from_slice(header.as_bytes());
    line.extend_from_slice(content);
    line.extend_from_slice(RESET_SEQUENCE.as_bytes());
    line.push(b'\n');
    line
}
