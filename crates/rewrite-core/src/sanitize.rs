//! Input cleaning applied to every user-supplied field before it reaches a prompt.

use serde_json::Value;

/// Maximum number of characters kept from a single field.
pub const MAX_INPUT_CHARS: usize = 6000;

/// Trim, cap at [`MAX_INPUT_CHARS`] characters and strip `<` / `>`.
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .take(MAX_INPUT_CHARS)
        .filter(|c| !matches!(c, '<' | '>'))
        .collect()
}

/// [`sanitize`] a JSON string value.
///
/// Anything that is not a string (numbers, booleans, `null`, arrays, objects,
/// an absent field) becomes `""`.
pub fn sanitize_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => sanitize(s),
        _ => String::new(),
    }
}
