//! The JSON text form.
//!
//! [`JsonValue`] is the target side of every mapping: two structures (object,
//! array) and four primitives (string, number, boolean, null). It is
//! `serde_json`'s value type, built with `preserve_order` so object members keep
//! their insertion order, and with `arbitrary_precision` so a number keeps its
//! literal. The decoder relies on the literal to tell `21` from `21.5` and to
//! carry integers wider than 64 bits.
//!
//! ## Examples
//!
//! ```rust
//! use shapejson::{json, parse_text};
//!
//! let value = parse_text(r#"[3.14,"NA",21]"#).unwrap();
//! let items = value.as_array().unwrap();
//! assert_eq!(items[0], json!(3.14));
//! assert_eq!(items[1].as_str(), Some("NA"));
//! assert_eq!(items[2].as_i64(), Some(21));
//! ```

use crate::Result;
use num_bigint::BigInt;

pub use serde_json::Number;

/// A JSON value.
pub type JsonValue = serde_json::Value;

/// An insertion-ordered map of string keys to JSON values.
///
/// Table rows rely on the order: the decoder reads columns in first-seen key
/// order, and the encoder writes row members in column order.
///
/// ```rust
/// use shapejson::{JsonMap, JsonValue};
///
/// let mut row = JsonMap::new();
/// row.insert("origin".to_string(), JsonValue::from("EWR"));
/// row.insert("dest".to_string(), JsonValue::from("IAH"));
///
/// let keys: Vec<_> = row.keys().cloned().collect();
/// assert_eq!(keys, vec!["origin", "dest"]);
/// ```
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// Whole reals below this magnitude are written without a fraction.
const WHOLE_LIMIT: f64 = 1e15;

/// Returns `true` for null, booleans, numbers and strings.
#[inline]
#[must_use]
pub fn is_primitive(value: &JsonValue) -> bool {
    !is_structural(value)
}

/// Returns `true` for arrays and objects.
#[inline]
#[must_use]
pub fn is_structural(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Array(_) | JsonValue::Object(_))
}

/// Builds the number literal for a real.
///
/// A whole value prints as an integer (`21`, not `21.0`). Any other finite value
/// gets the shortest literal that reads back to the same `f64`, with an exponent
/// for very large or very small magnitudes. A non-finite value has no literal and
/// becomes `null`.
///
/// # Examples
///
/// ```rust
/// use shapejson::json::real;
///
/// assert_eq!(real(21.0).to_string(), "21");
/// assert_eq!(real(3.14).to_string(), "3.14");
/// assert!(real(1e300).to_string().len() < 10);
/// assert!(real(f64::NAN).is_null());
/// ```
#[must_use]
pub fn real(value: f64) -> JsonValue {
    if value.fract() == 0.0 && value.abs() < WHOLE_LIMIT {
        JsonValue::from(value as i64)
    } else {
        Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
    }
}

/// Builds the exact number literal for a big integer.
///
/// # Errors
///
/// Returns an error only if the decimal form of `value` is not a JSON number,
/// which does not happen for a well-formed [`BigInt`].
pub fn big(value: &BigInt) -> Result<JsonValue> {
    if let Ok(small) = i64::try_from(value) {
        return Ok(JsonValue::from(small));
    }
    let number: Number = serde_json::from_str(&value.to_string())?;
    Ok(JsonValue::Number(number))
}
