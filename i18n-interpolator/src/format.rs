use serde_json::{Number, Value};

/// Render a resolved value as the text spliced into a template.
///
/// Mappings are rendered as `{k: v, ...}` with the `"k: v"` pair strings
/// sorted as whole strings, so `{b: 1, a: 2}` always becomes `{a: 2, b: 1}`
/// regardless of insertion order.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => format_number(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => {
            let elements: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", elements.join(", "))
        }
        Value::Object(map) => {
            let mut pairs: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("{}: {}", key, format_value(val)))
                .collect();
            // Ordered by UTF-16 code units, like JavaScript string comparison
            pairs.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

fn format_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        // Integral floats print without the trailing ".0", keeping only the
        // shortest round-trip digits (1.2345678901234567e19 -> 12345678901234567000)
        Some(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{}", float)
        }
        _ => number.to_string(),
    }
}
