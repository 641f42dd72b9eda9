use serde_json::Value;
use std::io;

use super::{flatten_rows, record_array, scalar};

/// Write output as CSV to stdout.
///
/// Results carrying a record list (schedule entries, state listings) are
/// written one row per record; anything else as `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(records) = record_array(result) {
        write_records(&mut wtr, records);
    } else {
        let mut rows = Vec::new();
        flatten_rows("", result, &mut rows);
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in rows {
            let _ = wtr.write_record([key, val]);
        }
    }

    let _ = wtr.flush();
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([scalar(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let _ = wtr.write_record(&headers);
    for map in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| map.get(*h).map(scalar).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}
