pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// The field of a result object holding an array of objects, such as
/// schedule entries or scheme rankings. Arrays of flat rows win over arrays
/// whose objects nest further arrays.
pub(crate) fn primary_rows(result: &Map<String, Value>) -> Option<(&str, &[Value])> {
    let object_arrays: Vec<(&str, &[Value])> = result
        .iter()
        .filter_map(|(key, val)| match val {
            Value::Array(arr) if matches!(arr.first(), Some(Value::Object(_))) => {
                Some((key.as_str(), arr.as_slice()))
            }
            _ => None,
        })
        .collect();

    let is_flat = |rows: &[Value]| match rows.first() {
        Some(Value::Object(row)) => row.values().all(|v| !v.is_array()),
        _ => false,
    };

    object_arrays
        .iter()
        .find(|(_, rows)| is_flat(*rows))
        .or_else(|| object_arrays.first())
        .copied()
}

/// Scalar fields of an object, with one level of nested objects flattened to
/// `parent.child` keys. Arrays are skipped.
pub(crate) fn scalar_fields(map: &Map<String, Value>) -> Vec<(String, &Value)> {
    let mut fields = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(_) => {}
            Value::Object(inner) => {
                for (child, child_val) in inner {
                    if !child_val.is_array() && !child_val.is_object() {
                        fields.push((format!("{key}.{child}"), child_val));
                    }
                }
            }
            _ => fields.push((key.clone(), val)),
        }
    }
    fields
}

pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
