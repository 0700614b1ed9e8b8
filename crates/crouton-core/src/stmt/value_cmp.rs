use super::Value;

use std::cmp::Ordering;

impl Value {
    /// Compares two values with coercion, the way a loosely typed client
    /// compares a fetched column with an expected literal.
    ///
    /// - `Null` only equals `Null`.
    /// - Two strings compare as strings.
    /// - Otherwise numbers, booleans (as 0 / 1) and numeric strings compare
    ///   numerically, so `I64(100) == "100"`. A blank string reads as 0.
    /// - Lists, records and objects compare element-wise with the same rules.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
            (Value::List(lhs), Value::List(rhs)) => slice_loose_eq(lhs, rhs),
            (Value::Record(lhs), Value::Record(rhs)) => slice_loose_eq(lhs, rhs),
            (Value::Object(lhs), Value::Object(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs.iter().all(|(key, lhs)| {
                        rhs.get(key).map(|rhs| lhs.loose_eq(rhs)).unwrap_or(false)
                    })
            }
            (lhs, rhs) => match (lhs.as_number(), rhs.as_number()) {
                (Some(lhs), Some(rhs)) => lhs == rhs,
                _ => false,
            },
        }
    }

    /// Total order used to sort sibling values before pairing them: `Null`
    /// first, then values that coerce to numbers (numerically), then
    /// everything else by its rendered text.
    pub fn loose_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (lhs, rhs) => match (lhs.as_number(), rhs.as_number()) {
                (Some(lhs), Some(rhs)) => lhs.total_cmp(&rhs),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => lhs.to_string().cmp(&rhs.to_string()),
            },
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::I64(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            Value::String(v) => parse_number(v),
            _ => None,
        }
    }
}

/// Decimal literals and `Infinity`. Spellings such as `inf` or `NaN` that
/// `f64::from_str` accepts are not numbers.
fn parse_number(src: &str) -> Option<f64> {
    let src = src.trim();

    if src.is_empty() {
        return Some(0.0);
    }

    match src {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let decimal = src
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));

    if decimal {
        src.parse().ok()
    } else {
        None
    }
}

fn slice_loose_eq(lhs: &[Value], rhs: &[Value]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(lhs, rhs)| lhs.loose_eq(rhs))
}
