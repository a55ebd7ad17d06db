use serde_json::Value;

use super::format_scalar;

/// Key answer fields, most specific first. `summary` is searched after the
/// top level of the result.
const PRIORITY_KEYS: [&str; 7] = [
    "best_scheme",
    "emi",
    "total_subvention",
    "total_depreciation",
    "total_sales",
    "active_years",
    "special_category",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        let summary = map.get("summary").and_then(|s| s.as_object());
        for key in PRIORITY_KEYS {
            let found = map
                .get(key)
                .or_else(|| summary.and_then(|s| s.get(key)))
                .filter(|v| !v.is_null());
            if let Some(val) = found {
                println!("{}", format_scalar(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().find(|(_, v)| !v.is_array() && !v.is_object()) {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}
