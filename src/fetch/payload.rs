use serde_json::Value;

/// Renders a payload as indented JSON (two spaces per level).
///
/// Serializing a `Value` never fails in practice.
pub fn format_payload(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
