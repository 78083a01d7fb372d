//! Lenient readers for provider JSON bodies
//!
//! Gateways are inconsistent about types: numbers arrive as strings, flags as
//! integers. These readers coerce instead of failing and fall back to zero
//! values when a field is missing.

use serde_json::Value;

/// Field at a JSON pointer, e.g. `/return/status`
pub fn field<'a>(body: &'a Value, pointer: &str) -> Option<&'a Value> {
    body.pointer(pointer).filter(|value| !value.is_null())
}

pub fn int_at(body: &Value, pointer: &str) -> i64 {
    field(body, pointer).map(to_int).unwrap_or(0)
}

pub fn string_at(body: &Value, pointer: &str) -> String {
    field(body, pointer).map(to_string).unwrap_or_default()
}

pub fn bool_at(body: &Value, pointer: &str) -> bool {
    field(body, pointer).map(to_bool).unwrap_or(false)
}

/// Integer value; strings contribute their leading digits
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(text) => leading_int(text),
        Value::Bool(flag) => i64::from(*flag),
        _ => 0,
    }
}

pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    }
}

/// Parse a plain-text body such as `2547` into an integer
pub fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
