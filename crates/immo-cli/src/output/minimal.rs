use serde_json::Value;

use super::scalar;

/// Headline figure per command, as JSON pointers into the result.
const PRIORITY_POINTERS: [&str; 5] = [
    "/cash_flow/monthly_cash_flow",
    "/summary/total_months",
    "/marginal_rate",
    "/tax_rate",
    "/rate",
];

/// Print just the key answer value from the output, falling back to the
/// first field of the result.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    for pointer in PRIORITY_POINTERS {
        if let Some(val) = result.pointer(pointer).filter(|v| !v.is_null()) {
            return scalar(val);
        }
    }

    match result {
        Value::Object(map) => match map.iter().next() {
            Some((key, val)) => format!("{}: {}", key, scalar(val)),
            None => String::new(),
        },
        _ => scalar(result),
    }
}
