use serde_json::Value;

use crate::error::PathError;

/// Resolve a dotted path such as `a.b[2].c` against a variables value.
///
/// Each dot-separated segment is either a plain key or a key followed by a
/// single `[index]` suffix. Every way the lookup can fail is reported as a
/// distinct [`PathError`] so callers can decide how to degrade.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    let mut current = value;

    for segment in path.split('.') {
        current = match split_index(segment) {
            Some((name, index_text)) => {
                let index: i64 = index_text
                    .trim()
                    .parse()
                    .map_err(|_| PathError::IndexNotInteger(index_text.to_string()))?;

                let items = current
                    .as_object()
                    .and_then(|map| map.get(name))
                    .and_then(Value::as_array)
                    .ok_or_else(|| PathError::NotASequence(name.to_string()))?;

                if index < 0 || index as usize >= items.len() {
                    return Err(PathError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    });
                }
                &items[index as usize]
            }
            None => {
                let map = current
                    .as_object()
                    .ok_or_else(|| PathError::NotAMapping(segment.to_string()))?;
                map.get(segment)
                    .ok_or_else(|| PathError::KeyNotFound(segment.to_string()))?
            }
        };
    }

    Ok(current)
}

/// Split `name[index]` into its base name and raw index text.
///
/// Segments that do not contain both brackets are plain keys.
fn split_index(segment: &str) -> Option<(&str, &str)> {
    let open = segment.find('[')?;
    let rest = &segment[open + 1..];
    let close = rest.find(']')?;
    Some((&segment[..open], &rest[..close]))
}
