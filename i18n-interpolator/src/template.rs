use serde_json::Value;
use tracing::debug;

use crate::format::format_value;
use crate::path::resolve_path;

/// Expand every `${path}` placeholder in `template` from `variables`.
///
/// The path runs up to the first `}` after `${`; braces do not nest. A
/// placeholder whose path cannot be resolved is copied through as written,
/// and a trailing `${` without a closing brace is kept along with the rest
/// of the template.
pub fn substitute(template: &str, variables: &Value) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find('}') else {
            result.push_str("${");
            result.push_str(after_open);
            return result;
        };

        let path = &after_open[..end];
        match resolve_path(variables, path) {
            Ok(value) => result.push_str(&format_value(value)),
            Err(err) => {
                debug!("Leaving placeholder '${{{}}}' unresolved: {}", path, err);
                result.push_str("${");
                result.push_str(path);
                result.push('}');
            }
        }
        rest = &after_open[end + 1..];
    }

    result.push_str(rest);
    result
}
