//! Mapping Conventions
//!
//! This module documents the rules that connect source shapes to JSON, as
//! implemented by this library. The rules follow R's jsonlite.
//!
//! # Encoding
//!
//! ## Vectors
//!
//! A vector of any length becomes an array of primitives, even when it holds a
//! single element:
//!
//! ```rust
//! use shapejson::{to_string, RValue, Vector};
//!
//! assert_eq!(to_string(&RValue::from(Vector::from(vec![1, 2]))).unwrap(), "[1,2]");
//! assert_eq!(to_string(&RValue::from(Vector::from(vec![1]))).unwrap(), "[1]");
//! ```
//!
//! Use [`RValue::Scalar`](crate::RValue::Scalar) or `auto_unbox` for a bare primitive.
//!
//! ## Missing and special values
//!
//! | Vector kind | NA | NaN | Inf / -Inf |
//! |-------------|----|-----|------------|
//! | logical, character | `null` | n/a | n/a |
//! | integer, double, complex | `"NA"` | `"NaN"` | `"Inf"` / `"-Inf"` |
//!
//! Quoted tokens keep NA and NaN apart, which `null` cannot do. The
//! [`NaPolicy`](crate::NaPolicy) option switches to all-`null` or all-`"NA"`
//! output.
//!
//! ## Matrices
//!
//! Matrices are written row by row. Row and column labels are dropped:
//!
//! ```text
//! [[1,2,3,4],[5,6,7,8],[9,10,11,12]]
//! ```
//!
//! ## Lists
//!
//! | List | JSON |
//! |------|------|
//! | unnamed | array |
//! | named | object |
//! | partially named | object; unlabelled positions use their 1-based index |
//!
//! A label repeated within one list is rejected. A scalar inside an unnamed list
//! is boxed as `[x]`, so an array never mixes primitives with structures.
//!
//! ## Tables
//!
//! Tables are written as an array of records. A cell holding NA is left out of
//! its record:
//!
//! ```rust
//! use shapejson::{to_string, RValue, Table, Vector};
//!
//! let table = Table::new(vec![
//!     ("foo".to_string(), Vector::from(vec![Some(false), None])),
//!     ("bar".to_string(), Vector::from(vec![Some("Aladdin"), None])),
//! ])
//! .unwrap();
//! assert_eq!(
//!     to_string(&RValue::from(table)).unwrap(),
//!     r#"[{"foo":false,"bar":"Aladdin"},{}]"#
//! );
//! ```
//!
//! Row labels go under the reserved `"_row"` key.
//!
//! ## Normalized kinds
//!
//! | Source | Default output | Alternative |
//! |--------|----------------|-------------|
//! | factor | level label | 1-based code |
//! | date | `"2013-01-01"` | days since 1970-01-01 |
//! | date-time (UTC) | `"2013-01-01 05:15:00"` | ISO 8601 or epoch milliseconds |
//! | complex | `"1+2i"` | `{"real":[..],"imaginary":[..]}` |
//! | big integer | exact number | decimal string |
//!
//! # Decoding
//!
//! | JSON | Result |
//! |------|--------|
//! | array of primitives | vector of the widest kind (logical < integer < double) |
//! | array of primitive-only objects | table over the union of keys |
//! | array of equal-length primitive arrays | matrix |
//! | object | named list |
//! | anything else | unnamed list |
//! | `[]` | empty list |
//!
//! `"NA"`, `"NaN"`, `"Inf"` and `"-Inf"` are markers when the same array holds a
//! boolean, a number, or nothing but tokens and nulls. Next to ordinary text they
//! are text:
//!
//! ```rust
//! use shapejson::{from_str, Double, RValue, Vector};
//!
//! assert_eq!(
//!     from_str(r#"[1,"NA"]"#).unwrap(),
//!     RValue::from(Vector::from(vec![Some(1), None]))
//! );
//! assert_eq!(
//!     from_str(r#"["NaN","-Inf"]"#).unwrap(),
//!     RValue::from(Vector::Double(vec![Double::NaN, Double::NegativeInfinity]))
//! );
//! assert_eq!(
//!     from_str(r#"["NA","x"]"#).unwrap(),
//!     RValue::from(Vector::from(vec!["NA", "x"]))
//! );
//! ```
//!
//! # Limitations
//!
//! - **Empty containers**: the empty list and the empty vector are both `[]`
//! - **Whole numbers**: `21.0` prints as `21` and decodes as an integer
//! - **Token-only text**: a text vector holding only the strings `"NA"`, `"NaN"`,
//!   `"Inf"` or `"-Inf"` decodes as numeric
//! - **Nested table columns**: records holding objects or arrays decode as lists
//! - **Lost attributes**: matrix labels, factor levels and dates decode as plain values
//!
//! # Conformance
//!
//! Output is RFC 8259 JSON. Input is parsed by `serde_json`: no comments, no
//! trailing commas. A repeated object key keeps its last value.

// This module contains only documentation; no implementation code
