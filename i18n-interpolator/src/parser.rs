use std::borrow::Cow;

use crate::error::{InterpolateError, InterpolateResult};

/// Literal that opens every marker.
const CALL_OPEN: &str = "${i18n(\"";
/// Literal that closes every marker.
const CALL_CLOSE: &str = ")}";

/// One `${i18n("KEY", variables)}` occurrence found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<'a> {
    /// Byte offset of the `${` that opens the marker
    pub start: usize,
    /// Byte offset just past the closing `)}`
    pub end: usize,
    pub key: Cow<'a, str>,
    /// Raw text of the variables argument, if the call has one
    pub raw_variables: Option<&'a str>,
}

/// Quoting state of the variables scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuotes,
}

/// Find the first marker in `text` at or after byte offset `from`.
///
/// Returns `Ok(None)` when there are no more markers. A marker whose
/// variables argument never reaches its closing `)}` is an error.
pub fn find_call(text: &str, from: usize) -> InterpolateResult<Option<Call<'_>>> {
    let Some(found) = text[from..].find(CALL_OPEN) else {
        return Ok(None);
    };
    let start = from + found;
    let key_start = start + CALL_OPEN.len();

    let (key, key_end) = read_key(text, key_start);
    let after_key = key_end + 1;
    let Some(args_start) = skip_whitespace(text, after_key) else {
        return Err(unterminated(key, start));
    };

    if text[args_start..].starts_with(CALL_CLOSE) {
        return Ok(Some(Call {
            start,
            end: args_start + CALL_CLOSE.len(),
            key,
            raw_variables: None,
        }));
    }

    let variables_start = if text[args_start..].starts_with(',') {
        args_start + 1
    } else {
        args_start
    };

    match find_variables_end(text, variables_start) {
        Some(variables_end) => Ok(Some(Call {
            start,
            end: variables_end + CALL_CLOSE.len(),
            key,
            raw_variables: Some(&text[variables_start..variables_end]),
        })),
        None => Err(unterminated(key, start)),
    }
}

/// Read the key up to the first unescaped `"`.
///
/// Returns the key (with `\"` unescaped) and the byte offset of the closing
/// quote. Without a closing quote the key runs to the end of the text.
fn read_key(text: &str, key_start: usize) -> (Cow<'_, str>, usize) {
    let bytes = text.as_bytes();
    let mut escaped = false;
    let mut i = key_start;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'"') => {
                escaped = true;
                i += 2;
                continue;
            }
            b'"' => break,
            _ => i += 1,
        }
    }

    let raw = &text[key_start..i.min(bytes.len())];
    let key = if escaped {
        Cow::Owned(raw.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(raw)
    };
    (key, i)
}

fn skip_whitespace(text: &str, from: usize) -> Option<usize> {
    if from >= text.len() {
        return None;
    }
    let rest = &text[from..];
    let skipped = rest.len() - rest.trim_start().len();
    Some(from + skipped)
}

/// Scan the variables argument and return the byte offset of the `)` that
/// closes the call.
///
/// Parentheses only count outside double quotes. `\"` is consumed as one
/// unit and never toggles quoting, which lets a quoted value carry a whole
/// nested marker such as `"${i18n(\"inner\")}"`.
fn find_variables_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut state = ScanState::Normal;
    // The call's own opening parenthesis
    let mut depth: i64 = 1;
    let mut i = from;

    while i < bytes.len() {
        let byte = bytes[i];
        if byte == b'\\' && bytes.get(i + 1) == Some(&b'"') {
            i += 2;
            continue;
        }

        match (state, byte) {
            (ScanState::Normal, b'"') => state = ScanState::InQuotes,
            (ScanState::InQuotes, b'"') => state = ScanState::Normal,
            (ScanState::Normal, b'(') => depth += 1,
            (ScanState::Normal, b')') => {
                depth -= 1;
                if depth == 0 && bytes.get(i + 1) == Some(&b'}') {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

fn unterminated(key: Cow<'_, str>, offset: usize) -> InterpolateError {
    InterpolateError::UnterminatedCall {
        key: key.into_owned(),
        offset,
    }
}
