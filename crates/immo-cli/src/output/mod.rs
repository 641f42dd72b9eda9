pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar for a table cell or CSV field.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Flatten nested result groups into `group.field` rows, leaving arrays
/// for the caller to render separately.
pub(crate) fn flatten_rows(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                match val {
                    Value::Object(_) => flatten_rows(&path, val, rows),
                    Value::Array(_) => {}
                    _ => rows.push((path, scalar(val))),
                }
            }
        }
        _ => rows.push((prefix.to_string(), scalar(value))),
    }
}

/// First array of objects inside a result (e.g. schedule entries).
pub(crate) fn record_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(arr) => Some(arr),
        Value::Object(map) => map.values().find_map(|v| match v {
            Value::Array(arr) if arr.first().is_some_and(Value::is_object) => Some(arr),
            _ => None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_groups() {
        let value = json!({
            "financing": { "loan_amount": "274710" },
            "tax_basis": "defaults",
            "entries": [{ "month": 1 }]
        });
        let mut rows = Vec::new();
        flatten_rows("", &value, &mut rows);
        assert!(rows.contains(&("financing.loan_amount".into(), "274710".into())));
        assert!(rows.contains(&("tax_basis".into(), "defaults".into())));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_record_array_finds_entries() {
        let value = json!({ "entries": [{ "month": 1 }], "summary": {} });
        assert_eq!(record_array(&value).map(|a| a.len()), Some(1));
        assert!(record_array(&json!({ "a": "1" })).is_none());
    }
}
