//! Compact RISON-style structural encoding.
//!
//! This module knows nothing about chart semantics. It serializes an
//! already-canonicalized tree of values into the compact textual form the
//! front end parses out of the URL fragment: objects as `(k:v,...)`, lists
//! as `!(v,...)`, strings bare when safe and single-quoted otherwise.
//!
//! Determinism contract: identical input (same keys in the same map order,
//! same list order, same values) always yields byte-identical output.

use indexmap::IndexMap;

/// A node in the encodable value tree.
///
/// Absent values are represented by not inserting the key at all; there is
/// no null variant on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RisonValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<RisonValue>),
    Object(IndexMap<&'static str, RisonValue>),
}

impl RisonValue {
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Builds an object preserving the given entry order.
    #[must_use]
    pub fn object(entries: impl IntoIterator<Item = (&'static str, RisonValue)>) -> Self {
        Self::Object(entries.into_iter().collect())
    }
}

/// Serializes a value tree into its compact textual form.
#[must_use]
pub fn encode(value: &RisonValue) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &RisonValue, out: &mut String) {
    match value {
        RisonValue::Str(s) => write_string(s, out),
        RisonValue::Int(n) => {
            out.push_str(&n.to_string());
        }
        RisonValue::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
        }
        RisonValue::List(items) => {
            out.push_str("!(");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(')');
        }
        RisonValue::Object(entries) => {
            out.push('(');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push(')');
        }
    }
}

/// Reports whether a string may be emitted without quotes.
///
/// Bare strings are restricted to identifier-ish ASCII so the decode side
/// can never confuse them with structure. Anything empty, anything holding
/// a reserved character or whitespace, and anything that reads as a boolean
/// or integer literal must be quoted.
#[must_use]
pub fn is_bare_safe(s: &str) -> bool {
    if s.is_empty() || looks_like_literal(s) {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'))
}

fn looks_like_literal(s: &str) -> bool {
    if s == "true" || s == "false" {
        return true;
    }
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn write_string(s: &str, out: &mut String) {
    if is_bare_safe(s) {
        out.push_str(s);
        return;
    }
    out.push('\'');
    for c in s.chars() {
        match c {
            '!' => out.push_str("!!"),
            '\'' => out.push_str("!'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
}
