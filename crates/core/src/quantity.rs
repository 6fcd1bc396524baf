//! Lenient quantity coercion at the ledger boundary.
//!
//! The ledger services are loosely typed; line-item quantities arrive as
//! JSON numbers or as numeric strings. Coercion happens once, during
//! deserialization, so the aggregation fold only ever sees usable numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Coerce a raw JSON value into a finite quantity.
///
/// Accepts numbers and trimmed numeric strings. Anything else, including
/// NaN/infinity artifacts, is `None`.
pub fn coerce(value: &JsonValue) -> Option<f64> {
    let quantity = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    quantity.is_finite().then_some(quantity)
}

/// Serde adapter for line-item quantity fields.
///
/// Missing, null, or unparsable quantities decode to `None` instead of
/// failing the whole payload; the skip happens downstream, per line.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = JsonValue::deserialize(deserializer)?;
    Ok(coerce(&raw))
}

#[cfg(test)]
mod tests {
    use super::coerce;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce(&json!(50)), Some(50.0));
        assert_eq!(coerce(&json!(2.5)), Some(2.5));
        assert_eq!(coerce(&json!(0)), Some(0.0));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(coerce(&json!("70")), Some(70.0));
        assert_eq!(coerce(&json!("  3.25 ")), Some(3.25));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(coerce(&json!("a lot")), None);
        assert_eq!(coerce(&json!(null)), None);
        assert_eq!(coerce(&json!({"value": 1})), None);
        assert_eq!(coerce(&json!([1])), None);
        assert_eq!(coerce(&json!("NaN")), None);
        assert_eq!(coerce(&json!("inf")), None);
    }
}
