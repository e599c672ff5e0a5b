//! Top-level property scan run before variant dispatch.
//!
//! No shipped union reacts to any property, but the pass stays so that a
//! union can look at reserved keys before its variants are tried. Nested
//! objects and arrays are handed over whole, never entered.

use serde_json::Value;
use tracing::trace;

use crate::cursor::ReplayCursor;

/// Feed every top-level property of the cursor's object to `inspect`, in
/// document order. Returns the number of properties consumed.
pub fn scan_properties<F>(cursor: &ReplayCursor, mut inspect: F) -> usize
where
    F: FnMut(&str, &Value),
{
    let mut consumed = 0;
    for (name, value) in cursor.properties() {
        trace!(property = name, "scanning top-level property");
        inspect(name, value);
        consumed += 1;
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_skips_nested_members() {
        let cursor = ReplayCursor::new(json!({
            "outer": {"inner": {"deeper": [{"k": 1}, [[{"k": 2}]]]}},
            "cultivar": "Fuji",
            "tail": [1, {"x": {"y": {}}}]
        }));

        let mut seen = Vec::new();
        let consumed = scan_properties(&cursor, |name, _| seen.push(name.to_string()));

        assert_eq!(consumed, 3);
        assert_eq!(seen, vec!["outer", "cultivar", "tail"]);
    }

    #[test]
    fn test_scan_passes_nested_values_whole() {
        let cursor = ReplayCursor::new(json!({"outer": {"inner": [1, 2]}}));

        let mut captured = None;
        scan_properties(&cursor, |_, value| captured = Some(value.clone()));

        assert_eq!(captured, Some(json!({"inner": [1, 2]})));
    }

    #[test]
    fn test_scan_of_array_is_empty() {
        let cursor = ReplayCursor::new(json!([{"a": 1}, {"b": 2}]));
        assert_eq!(scan_properties(&cursor, |_, _| {}), 0);
    }
}
