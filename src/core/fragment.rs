//! Percent-encoding of the fragment payload.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// RFC 3986 fragment rules plus `#` and `%` themselves, so the payload can
// be appended verbatim after the `#` marker. The RISON structural
// characters (parentheses, `!`, `'`, `:`, `,`) are fragment-legal and stay
// literal.
const FRAGMENT_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes a payload for embedding after the `#` marker of a URL.
/// Non-ASCII input is UTF-8 percent-encoded.
#[must_use]
pub fn encode_fragment(payload: &str) -> String {
    utf8_percent_encode(payload, FRAGMENT_UNSAFE).to_string()
}
