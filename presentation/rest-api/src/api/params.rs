use serde_json::Value;

/// Numeric coercion of a path id. Anything that is not a plain
/// non-negative integer matches no record.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// A body field that was sent but does not read as a number.
#[derive(Debug, PartialEq, Eq)]
pub struct NotNumeric;

/// Reads a body field sent either as a JSON number or as a numeric string.
/// `null` and an absent field both give `None`.
pub fn coerce_number(value: Option<Value>) -> Result<Option<f64>, NotNumeric> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(NotNumeric),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or(NotNumeric),
        Some(_) => Err(NotNumeric),
    }
}

/// Like [`coerce_number`], but the value must also be a whole number.
pub fn coerce_integer(value: Option<Value>) -> Result<Option<i64>, NotNumeric> {
    if let Some(Value::Number(n)) = &value {
        if let Some(i) = n.as_i64() {
            return Ok(Some(i));
        }
    }

    match coerce_number(value)? {
        None => Ok(None),
        Some(n) if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 => {
            Ok(Some(n as i64))
        }
        Some(_) => Err(NotNumeric),
    }
}
