use serde_json::Value;

/// Resolve `field` inside `source`.
///
/// Bracket notation walks nested values: `user[name]` reads
/// `source["user"]["name"]` and `users[0]` indexes arrays. A literal key match
/// wins first so flat form maps with keys like `user[name]` still resolve.
/// Only strings and numbers are returned.
#[must_use]
pub fn lookup(source: Option<&Value>, field: &str) -> Option<String> {
    let mut current = source?;

    if let Some(value) = current.get(field) {
        if let Some(scalar) = scalar(value) {
            return Some(scalar);
        }
    }

    let path = field.replace(']', "");
    for segment in path.split('[') {
        let next = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };

        match next {
            Value::Object(_) | Value::Array(_) => current = next,
            other => return scalar(other),
        }
    }

    None
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
