use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten_rows, record_array, scalar};

/// Format output as tables: one field/value table for the (flattened) result,
/// plus a row table for any record list such as schedule entries.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(result) => print_result(result, map),
            None => print_fields(value),
        },
        Value::Array(arr) => print_records(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value, envelope: &Map<String, Value>) {
    print_fields(result);

    if let Some(records) = record_array(result) {
        println!();
        print_records(records);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(value: &Value) {
    let mut rows = Vec::new();
    flatten_rows("", value, &mut rows);
    if rows.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in rows {
        builder.push_record([key, val]);
    }
    println!("{}", Table::from(builder));
}

fn print_records(arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        if arr.is_empty() {
            println!("(empty)");
        }
        for item in arr {
            println!("{}", scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for map in arr.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| map.get(h.as_str()).map(scalar).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));
}
