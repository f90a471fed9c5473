//! # shapejson
//!
//! Shape-aware conversion between statistical data values and JSON.
//!
//! ## What does it do?
//!
//! A data language works with atomic vectors, matrices, lists and data tables.
//! JSON only has arrays, objects and four primitives. This crate maps one onto the
//! other with a fixed set of rules (the conventions popularised by R's jsonlite),
//! so that the same value always produces the same text and the text decodes back
//! to the closest matching shape.
//!
//! ## Key Features
//!
//! - **Shape-directed encoding**: one rule per shape tag, no guessing on the way out
//! - **Missing values**: NA, NaN, Inf and -Inf stay distinct under the default policy
//! - **Row-oriented tables**: data tables become arrays of records, with NA cells omitted
//! - **Best-fit decoding**: vectors, matrices and tables are recognised from plain JSON
//! - **Normalization**: factors, dates, date-times and big integers are coerced in one place
//!
//! ## Quick Start
//!
//! ```rust
//! use shapejson::{from_str, to_string, RValue, Vector};
//!
//! let x = RValue::from(Vector::from(vec![Some(1), None, Some(3)]));
//! let json = to_string(&x).unwrap();
//! assert_eq!(json, r#"[1,"NA",3]"#);
//!
//! let back = from_str(&json).unwrap();
//! assert_eq!(back, x);
//! ```
//!
//! ### Tables
//!
//! ```rust
//! use shapejson::{to_string, RValue, Table, Vector};
//!
//! let table = Table::new(vec![
//!     ("foo".to_string(), Vector::from(vec![Some(false), Some(true), None, None])),
//!     ("bar".to_string(), Vector::from(vec![Some("Aladdin"), None, None, Some("Mario")])),
//! ])
//! .unwrap();
//!
//! let json = to_string(&RValue::from(table)).unwrap();
//! assert_eq!(
//!     json,
//!     r#"[{"foo":false,"bar":"Aladdin"},{"foo":true},{},{"bar":"Mario"}]"#
//! );
//! ```
//!
//! ### Decoding a JSON value
//!
//! ```rust
//! use shapejson::{from_value, json, RValue};
//!
//! let value = json!([[1, 2, 3], [4, 5, 6]]);
//! let m = from_value(&value).unwrap();
//! assert!(matches!(m, RValue::Matrix(_)));
//! ```
//!
//! ## Lossy cases
//!
//! - The empty list and the empty vector both encode to `[]`
//! - Whole-valued reals print without a fraction and decode as integers
//! - Text holding nothing but the tokens `"NA"`, `"NaN"`, `"Inf"` and `"-Inf"`
//!   decodes as numeric
//! - Matrix, factor, date and complex values decode as matrices or plain vectors
//!   of their encoded kind
//!
//! ## JSON text
//!
//! The text form is `serde_json`'s [`Value`](serde_json::Value), re-exported as
//! [`JsonValue`] together with its [`json!`] macro. Parsing, escaping and number
//! literals are `serde_json`'s; this crate adds the pretty layout that keeps
//! vectors and matrix rows on one line (see [`text`]).
//!
//! ## Logging
//!
//! Decoding emits `log` records: `trace` for each classification and `debug`
//! whenever a fallback is taken. No logger is installed by the library.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`flights.rs`** - A flights table through every table layout
//! - **`missing_values.rs`** - NA, NaN and infinities under each policy
//!
//! Run one with: `cargo run --example <name>`

pub mod conventions;
pub mod decode;
pub mod encode;
pub mod error;
pub mod json;
pub mod normalize;
pub mod options;
pub mod text;
pub mod value;

pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{Error, Result};
pub use json::{JsonMap, JsonValue, Number};
pub use options::{
    BigIntPolicy, ComplexFormat, DateFormat, DateTimeFormat, DecodeOptions, EmptyArrayPolicy,
    EncodeOptions, FactorFormat, MatrixLayout, NaPolicy, NullFormat, TableLayout,
};
pub use serde_json::json;
pub use value::{
    Complex, Double, Factor, List, Matrix, Naming, RValue, Table, Vector, VectorKind,
};

use std::io;

/// Encode a value as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use shapejson::{to_string, Matrix, RValue, Vector};
///
/// let m = Matrix::from_row_major(Vector::from(vec![1, 2, 3, 4]), 2, 2).unwrap();
/// assert_eq!(to_string(&RValue::from(m)).unwrap(), "[[1,2],[3,4]]");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] if a part of the value has no encoding rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &RValue) -> Result<String> {
    to_string_with_options(value, EncodeOptions::default())
}

/// Encode a value as indented JSON text.
///
/// Only whitespace differs from [`to_string`].
///
/// # Examples
///
/// ```rust
/// use shapejson::{to_string_pretty, List, RValue, Vector};
///
/// let list = List::named(vec![("x".to_string(), RValue::from(Vector::from(vec![1, 2])))]);
/// assert_eq!(to_string_pretty(&RValue::from(list)).unwrap(), "{\n  \"x\": [1, 2]\n}");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] if a part of the value has no encoding rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(value: &RValue) -> Result<String> {
    to_string_with_options(value, EncodeOptions::pretty())
}

/// Encode a value as JSON text with custom options.
///
/// # Examples
///
/// ```rust
/// use shapejson::{to_string_with_options, EncodeOptions, RValue, Vector};
///
/// let options = EncodeOptions::new().with_auto_unbox(true);
/// let json = to_string_with_options(&RValue::from(Vector::from(vec!["JFK"])), options).unwrap();
/// assert_eq!(json, r#""JFK""#);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] if a part of the value has no encoding rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &RValue, options: EncodeOptions) -> Result<String> {
    let json = Encoder::new(&options).encode(value)?;
    text::to_text(&json, &options)
}

/// Encode a value into its JSON value form.
///
/// # Examples
///
/// ```rust
/// use shapejson::{to_value, JsonValue, RValue};
///
/// assert!(to_value(&RValue::Null).unwrap().is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] if a part of the value has no encoding rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value(value: &RValue) -> Result<JsonValue> {
    to_value_with_options(value, EncodeOptions::default())
}

/// Encode a value into its JSON value form with custom options.
///
/// # Examples
///
/// ```rust
/// use shapejson::{json, to_value_with_options, EncodeOptions, NullFormat, RValue};
///
/// let options = EncodeOptions::new().with_null(NullFormat::Null);
/// assert_eq!(to_value_with_options(&RValue::Null, options).unwrap(), json!(null));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] if a part of the value has no encoding rule.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with_options(value: &RValue, options: EncodeOptions) -> Result<JsonValue> {
    Encoder::new(&options).encode(value)
}

/// Encode a value as JSON text into a writer.
///
/// # Examples
///
/// ```rust
/// use shapejson::{to_writer, RValue, Vector};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &RValue::from(Vector::from(vec![true]))).unwrap();
/// assert_eq!(buffer, b"[true]");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, value: &RValue) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Encode a value as JSON text into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, value: &RValue, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
{
    let json = Encoder::new(&options).encode(value)?;
    text::to_writer(writer, &json, &options)
}

/// Parse JSON text into its value form without any shape inference.
///
/// # Examples
///
/// ```rust
/// use shapejson::parse_text;
///
/// let value = parse_text(r#"{"year": 2013}"#).unwrap();
/// assert_eq!(value.as_object().and_then(|o| o.get("year")).and_then(|v| v.as_i64()), Some(2013));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with line and column if the text is not well-formed JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_text(s: &str) -> Result<JsonValue> {
    serde_json::from_str(s).map_err(|e| Error::from_json(e, s))
}

/// Decode JSON text into the best-fitting value.
///
/// # Examples
///
/// ```rust
/// use shapejson::{from_str, RValue, Vector};
///
/// let value = from_str(r#"["a", null]"#).unwrap();
/// assert_eq!(value, RValue::from(Vector::from(vec![Some("a"), None])));
/// ```
///
/// # Errors
///
/// Returns a format error if the text is not well-formed JSON or holds table rows
/// that cannot be reconciled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<RValue> {
    from_str_with_options(s, DecodeOptions::default())
}

/// Decode JSON text with custom options.
///
/// # Errors
///
/// Returns a format error for malformed text or irreconcilable table rows, and
/// [`Error::AmbiguousDecode`] for an empty array under [`EmptyArrayPolicy::Reject`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: DecodeOptions) -> Result<RValue> {
    let json = parse_text(s)?;
    from_value_with_options(&json, options)
}

/// Decode JSON text read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use shapejson::from_reader;
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"[1,2]")).unwrap();
/// assert!(value.as_vector().is_some());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text does not decode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<RValue>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Decode JSON text from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text does not decode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<RValue> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Decode an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`Error::Format`] for table rows that cannot be reconciled.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value(value: &JsonValue) -> Result<RValue> {
    from_value_with_options(value, DecodeOptions::default())
}

/// Decode an already-parsed JSON value with custom options.
///
/// # Errors
///
/// Returns [`Error::Format`] for table rows that cannot be reconciled, and
/// [`Error::AmbiguousDecode`] for an empty array under [`EmptyArrayPolicy::Reject`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value_with_options(value: &JsonValue, options: DecodeOptions) -> Result<RValue> {
    Decoder::new(&options).decode(value)
}
