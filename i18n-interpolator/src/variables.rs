use serde_json::Value;

use crate::error::{InterpolateError, InterpolateResult};

/// Parse the variables argument of a marker.
///
/// The argument is JSON5, so unquoted keys, single-quoted strings, comments
/// and trailing commas are all accepted. Integer literals too large for an
/// `i64` are read as floats instead of failing.
pub fn parse_relaxed(key: &str, text: &str) -> InterpolateResult<Value> {
    json5::from_str::<Value>(text)
        .or_else(|err| match widen_large_integers(text) {
            Some(widened) => json5::from_str::<Value>(&widened).map_err(|_| err),
            None => Err(err),
        })
        .map_err(|err| InterpolateError::InvalidVariables {
            key: key.to_string(),
            message: err.to_string(),
        })
}

/// Rewrite decimal integer literals that overflow `i64` as float literals.
///
/// Strings and comments are copied untouched. Returns `None` when nothing
/// needed rewriting.
fn widen_large_integers(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len() + 8);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = text[i..].find('\n').map_or(bytes.len(), |end| i + end);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = text[i + 2..].find("*/").map_or(bytes.len(), |end| i + 2 + end + 2);
            }
            byte if byte.is_ascii_digit() && (i == 0 || !is_word_byte(bytes[i - 1])) => {
                let start = i;
                while i < bytes.len() && (is_word_byte(bytes[i])) {
                    i += 1;
                }
                let literal = &text[start..i];
                if literal.bytes().all(|b| b.is_ascii_digit()) && literal.parse::<i64>().is_err() {
                    result.push_str(&text[copied..i]);
                    result.push_str(".0");
                    copied = i;
                }
            }
            _ => i += 1,
        }
    }

    if copied == 0 {
        return None;
    }
    result.push_str(&text[copied..]);
    Some(result)
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'$' | b'.')
}
