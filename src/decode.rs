//! Best-fit decoding.
//!
//! The [`Decoder`] converts a [`JsonValue`] into the [`RValue`] shape that fits it
//! most closely:
//!
//! | JSON | Decoded shape |
//! |---|---|
//! | array of primitives with a common kind | vector |
//! | array of objects with primitive members | table |
//! | array of equal-length primitive arrays with a common kind | matrix |
//! | any other array, or an object | list |
//! | primitive / `null` at the top level | scalar / null |
//!
//! Element kinds widen along logical < integer < real. The quoted tokens `"NA"`,
//! `"NaN"`, `"Inf"` and `"-Inf"` are markers in arrays that hold booleans, numbers
//! or nothing but tokens and nulls. An array of tokens with at least one `"NaN"`,
//! `"Inf"` or `"-Inf"` is real, and one of `"NA"` tokens alone is an integer
//! vector of missing values. Next to ordinary text the tokens are text too.
//!
//! ## Examples
//!
//! ```rust
//! use shapejson::{from_str, Double, RValue, Vector};
//!
//! let value = from_str(r#"[3.14,"NA","NaN",21,"Inf","-Inf"]"#).unwrap();
//! assert_eq!(
//!     value,
//!     RValue::Vector(Vector::Double(vec![
//!         Double::Finite(3.14),
//!         Double::NA,
//!         Double::NaN,
//!         Double::Finite(21.0),
//!         Double::Infinity,
//!         Double::NegativeInfinity,
//!     ]))
//! );
//! ```

use crate::encode::ROW_NAMES_KEY;
use crate::json::{is_primitive, is_structural};
use crate::value::{Double, List, Matrix, RValue, Table, Vector};
use crate::{BigIntPolicy, DecodeOptions, EmptyArrayPolicy, Error, JsonMap, JsonValue, Number, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use num_bigint::BigInt;

/// A classified primitive.
#[derive(Clone, Debug)]
enum Cell<'a> {
    Missing,
    Bool(bool),
    Integer(i64),
    /// An integer literal outside the `i64` range
    Wide(BigInt),
    Real(f64),
    Token(Token),
    Text(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    NA,
    NaN,
    Infinity,
    NegativeInfinity,
}

impl Token {
    fn parse(s: &str) -> Option<Token> {
        match s {
            "NA" => Some(Token::NA),
            "NaN" => Some(Token::NaN),
            "Inf" => Some(Token::Infinity),
            "-Inf" => Some(Token::NegativeInfinity),
            _ => None,
        }
    }

    const fn text(&self) -> &'static str {
        match self {
            Token::NA => "NA",
            Token::NaN => "NaN",
            Token::Infinity => "Inf",
            Token::NegativeInfinity => "-Inf",
        }
    }
}

impl<'a> Cell<'a> {
    fn classify(value: Option<&'a JsonValue>) -> Cell<'a> {
        match value {
            None | Some(JsonValue::Null) => Cell::Missing,
            Some(JsonValue::Bool(b)) => Cell::Bool(*b),
            Some(JsonValue::Number(n)) => Cell::number(n),
            Some(JsonValue::String(s)) => Token::parse(s).map_or(Cell::Text(s), Cell::Token),
            // Callers only pass primitives
            Some(JsonValue::Array(_) | JsonValue::Object(_)) => Cell::Missing,
        }
    }

    /// Reads a number by its literal: integers stay integers, even past `i64`.
    fn number(n: &Number) -> Cell<'a> {
        if let Some(i) = n.as_i64() {
            return Cell::Integer(i);
        }
        let literal = n.as_str();
        if !literal.contains(['.', 'e', 'E']) {
            if let Ok(wide) = literal.parse::<BigInt>() {
                return Cell::Wide(wide);
            }
        }
        // Out-of-range reals overflow to an infinity
        literal.parse::<f64>().map_or(Cell::Missing, Cell::Real)
    }
}

/// The common element kind of a run of primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Common {
    Logical,
    Integer,
    Double,
    BigInt,
    Text,
}

/// Decodes JSON values under a fixed set of options.
pub struct Decoder<'o> {
    options: &'o DecodeOptions,
}

impl<'o> Decoder<'o> {
    pub fn new(options: &'o DecodeOptions) -> Self {
        Decoder { options }
    }

    /// Decodes `value` as a top-level document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for table rows that cannot be reconciled into one
    /// column set, and [`Error::AmbiguousDecode`] for an empty array under
    /// [`EmptyArrayPolicy::Reject`].
    pub fn decode(&self, value: &JsonValue) -> Result<RValue> {
        self.decode_at(value, "$")
    }

    fn decode_at(&self, value: &JsonValue, path: &str) -> Result<RValue> {
        match value {
            JsonValue::Null => Ok(RValue::Null),
            JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
                let cells = [Cell::classify(Some(value))];
                // A lone primitive always has a common kind
                Ok(infer(&cells, self.options.bigint)
                    .map_or(RValue::Null, RValue::Scalar))
            }
            JsonValue::Object(map) => self.decode_object(map, path),
            JsonValue::Array(items) => self.decode_array(items, path),
        }
    }

    fn decode_object(&self, map: &JsonMap, path: &str) -> Result<RValue> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, member) in map {
            let child = format!("{}.{}", path, key);
            entries.push((key.clone(), self.decode_at(member, &child)?));
        }
        Ok(RValue::List(List::named(entries)))
    }

    fn decode_array(&self, items: &[JsonValue], path: &str) -> Result<RValue> {
        if items.is_empty() {
            debug!("{}: empty array resolved by {:?} policy", path, self.options.empty_array);
            return match self.options.empty_array {
                EmptyArrayPolicy::List => Ok(RValue::List(List::unnamed(Vec::new()))),
                EmptyArrayPolicy::LogicalVector => Ok(RValue::Vector(Vector::Logical(Vec::new()))),
                EmptyArrayPolicy::Reject => Err(Error::ambiguous_decode(path)),
            };
        }

        if items.iter().all(is_primitive) {
            if self.options.simplify_vector {
                let cells: Vec<Cell<'_>> = items.iter().map(|v| Cell::classify(Some(v))).collect();
                if let Some(vector) = infer(&cells, self.options.bigint) {
                    trace!("{}: {} primitives -> {} vector", path, items.len(), vector.kind());
                    return Ok(RValue::Vector(vector));
                }
                debug!("{}: text mixed with booleans or numbers, falling back to list", path);
            }
            return self.decode_list(items, path);
        }

        if items.iter().all(JsonValue::is_object) {
            if self.options.simplify_vector && self.options.simplify_table {
                if let Some(table) = self.try_table(items, path)? {
                    trace!(
                        "{}: {} objects -> table with {} columns",
                        path,
                        items.len(),
                        table.ncol()
                    );
                    return Ok(RValue::Table(table));
                }
            }
            return self.decode_list(items, path);
        }

        if items.iter().all(JsonValue::is_array) {
            if self.options.simplify_vector && self.options.simplify_matrix {
                if let Some(matrix) = self.try_matrix(items)? {
                    trace!(
                        "{}: {} arrays -> {} x {} matrix",
                        path,
                        items.len(),
                        matrix.nrow(),
                        matrix.ncol()
                    );
                    return Ok(RValue::Matrix(matrix));
                }
            }
            return self.decode_list(items, path);
        }

        trace!("{}: mixed structures -> list", path);
        self.decode_list(items, path)
    }

    fn decode_list(&self, items: &[JsonValue], path: &str) -> Result<RValue> {
        let mut elements = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let child = format!("{}[{}]", path, i);
            elements.push(self.decode_at(item, &child)?);
        }
        Ok(RValue::List(List::unnamed(elements)))
    }

    fn try_matrix(&self, rows: &[JsonValue]) -> Result<Option<Matrix>> {
        let rows: Vec<&Vec<JsonValue>> = rows.iter().filter_map(JsonValue::as_array).collect();
        let ncol = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != ncol) {
            debug!("ragged arrays are not a matrix");
            return Ok(None);
        }
        if !rows.iter().flat_map(|r| r.iter()).all(is_primitive) {
            return Ok(None);
        }

        let cells: Vec<Cell<'_>> = rows
            .iter()
            .flat_map(|r| r.iter())
            .map(|v| Cell::classify(Some(v)))
            .collect();
        match infer(&cells, self.options.bigint) {
            Some(data) => Matrix::from_row_major(data, rows.len(), ncol).map(Some),
            None => {
                debug!("matrix cells have no common kind, falling back to list");
                Ok(None)
            }
        }
    }

    fn try_table(&self, rows: &[JsonValue], path: &str) -> Result<Option<Table>> {
        let rows: Vec<&JsonMap> = rows.iter().filter_map(JsonValue::as_object).collect();

        // Union of keys in first-seen order, with counts of primitive and
        // structural values per key. A column omitted from the first row
        // (an NA cell) lands after the keys that row does hold.
        let mut keys: IndexMap<&str, (usize, usize)> = IndexMap::new();
        for row in &rows {
            for (key, value) in *row {
                let counts = keys.entry(key.as_str()).or_insert((0, 0));
                if is_structural(value) {
                    counts.1 += 1;
                } else if !value.is_null() {
                    counts.0 += 1;
                }
            }
        }

        let mut nested = false;
        for (key, (primitive, structural)) in &keys {
            if *structural > 0 && *primitive > 0 {
                return Err(Error::format(
                    path,
                    &format!(
                        "key '{}' holds primitive values in some rows and structures in others",
                        key
                    ),
                ));
            }
            nested |= *structural > 0;
        }
        if nested {
            debug!("{}: rows hold nested structures, falling back to list", path);
            return Ok(None);
        }

        let mut columns = Vec::with_capacity(keys.len());
        let mut row_names = None;
        for key in keys.keys() {
            if *key == ROW_NAMES_KEY {
                let names = rows
                    .iter()
                    .map(|row| row.get(*key).and_then(JsonValue::as_str).map(str::to_string))
                    .collect::<Option<Vec<String>>>();
                if names.is_some() {
                    row_names = names;
                    continue;
                }
            }

            let cells: Vec<Cell<'_>> = rows.iter().map(|row| Cell::classify(row.get(*key))).collect();
            let column = infer(&cells, self.options.bigint).ok_or_else(|| {
                Error::format(
                    path,
                    &format!("column '{}' mixes text with booleans or numbers", key),
                )
            })?;
            columns.push(((*key).to_string(), column));
        }

        let table = Table::with_nrow(rows.len(), columns)?;
        match row_names {
            Some(names) => table.with_row_names(names).map(Some),
            None => Ok(Some(table)),
        }
    }
}

/// Finds the common kind of `cells` and builds the vector, or `None` when text
/// is mixed with booleans or numbers.
fn infer(cells: &[Cell<'_>], bigint: BigIntPolicy) -> Option<Vector> {
    let mut has_bool = false;
    let mut has_int = false;
    let mut has_wide = false;
    let mut has_float = false;
    let mut has_text = false;
    let mut has_special = false;
    let mut has_na_token = false;

    for cell in cells {
        match cell {
            Cell::Missing => {}
            Cell::Bool(_) => has_bool = true,
            Cell::Real(_) => has_float = true,
            Cell::Integer(i) if i32::try_from(*i).is_ok() => has_int = true,
            Cell::Integer(_) | Cell::Wide(_) => has_wide = true,
            Cell::Token(Token::NA) => has_na_token = true,
            Cell::Token(_) => has_special = true,
            Cell::Text(_) => has_text = true,
        }
    }

    let has_number = has_int || has_wide || has_float;
    let common = if has_text {
        if has_bool || has_number {
            return None;
        }
        Common::Text
    } else if !has_bool && !has_number {
        // Only nulls and tokens: text never writes tokens for its missing values
        if has_special {
            Common::Double
        } else if has_na_token {
            Common::Integer
        } else {
            Common::Logical
        }
    } else if has_float || has_special {
        Common::Double
    } else if has_wide {
        match bigint {
            BigIntPolicy::Double => Common::Double,
            BigIntPolicy::Exact => Common::BigInt,
        }
    } else if has_int {
        Common::Integer
    } else {
        Common::Logical
    };

    Some(build(cells, common))
}

fn build(cells: &[Cell<'_>], common: Common) -> Vector {
    match common {
        Common::Logical => Vector::Logical(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect(),
        ),
        Common::Integer => Vector::Integer(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(b) => Some(i32::from(*b)),
                    Cell::Integer(i) => i32::try_from(*i).ok(),
                    _ => None,
                })
                .collect(),
        ),
        Common::Double => Vector::Double(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(b) => Double::Finite(f64::from(u8::from(*b))),
                    Cell::Integer(i) => Double::Finite(*i as f64),
                    Cell::Wide(w) => Double::from(w.to_string().parse::<f64>().unwrap_or(f64::NAN)),
                    Cell::Real(f) => Double::from(*f),
                    Cell::Token(Token::NaN) => Double::NaN,
                    Cell::Token(Token::Infinity) => Double::Infinity,
                    Cell::Token(Token::NegativeInfinity) => Double::NegativeInfinity,
                    Cell::Missing | Cell::Token(Token::NA) | Cell::Text(_) => Double::NA,
                })
                .collect(),
        ),
        Common::BigInt => Vector::BigInt(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Bool(b) => Some(BigInt::from(u8::from(*b))),
                    Cell::Integer(i) => Some(BigInt::from(*i)),
                    Cell::Wide(w) => Some(w.clone()),
                    _ => None,
                })
                .collect(),
        ),
        Common::Text => Vector::Text(
            cells
                .iter()
                .map(|c| match c {
                    Cell::Text(s) => Some((*s).to_string()),
                    Cell::Token(t) => Some(t.text().to_string()),
                    _ => None,
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: &JsonValue) -> Result<RValue> {
        Decoder::new(&DecodeOptions::new()).decode(value)
    }

    #[test]
    fn test_widening() {
        assert_eq!(
            decode(&json!([true, 2])).unwrap(),
            RValue::Vector(Vector::from(vec![1, 2]))
        );
        assert_eq!(
            decode(&json!([1, 2.5, null])).unwrap(),
            RValue::Vector(Vector::Double(vec![
                Double::Finite(1.0),
                Double::Finite(2.5),
                Double::NA
            ]))
        );
        assert_eq!(
            decode(&json!([true, null, "NA"])).unwrap(),
            RValue::Vector(Vector::from(vec![Some(true), None, None]))
        );
    }

    #[test]
    fn test_tokens_alone_are_numeric() {
        assert_eq!(
            decode(&json!(["NA", "NaN", "Inf", "-Inf"])).unwrap(),
            RValue::Vector(Vector::Double(vec![
                Double::NA,
                Double::NaN,
                Double::Infinity,
                Double::NegativeInfinity,
            ]))
        );
        assert_eq!(
            decode(&json!(["NA", null])).unwrap(),
            RValue::Vector(Vector::from(vec![None::<i32>, None]))
        );
        assert_eq!(
            decode(&json!("Inf")).unwrap(),
            RValue::Scalar(Vector::Double(vec![Double::Infinity]))
        );
    }

    #[test]
    fn test_tokens_next_to_text_are_literal() {
        assert_eq!(
            decode(&json!(["NA", "Inf", "JFK", null])).unwrap(),
            RValue::Vector(Vector::from(vec![Some("NA"), Some("Inf"), Some("JFK"), None]))
        );
    }

    #[test]
    fn test_table_column_of_tokens_is_real() {
        let rows = json!([{"x": "NaN"}, {"x": "Inf"}, {}]);
        let value = decode(&rows).unwrap();
        assert_eq!(
            value.as_table().and_then(|t| t.column("x")),
            Some(&Vector::Double(vec![Double::NaN, Double::Infinity, Double::NA]))
        );
    }

    #[test]
    fn test_number_literals() {
        let value = decode(&serde_json::from_str("[1e-300, 2, 2.0]").unwrap()).unwrap();
        assert_eq!(
            value,
            RValue::Vector(Vector::Double(vec![
                Double::Finite(1e-300),
                Double::Finite(2.0),
                Double::Finite(2.0),
            ]))
        );

        let wide = decode(&serde_json::from_str("[123456789012345678901234567890]").unwrap());
        assert!(matches!(wide.unwrap(), RValue::Vector(Vector::Double(_))));
    }

    #[test]
    fn test_all_null_is_logical() {
        assert_eq!(
            decode(&json!([null, null])).unwrap(),
            RValue::Vector(Vector::from(vec![None::<bool>, None]))
        );
    }

    #[test]
    fn test_text_mixed_with_numbers_is_a_list() {
        let value = decode(&json!([1, "a", null])).unwrap();
        assert_eq!(
            value,
            RValue::List(List::unnamed(vec![
                RValue::scalar(vec![1]),
                RValue::scalar(vec!["a"]),
                RValue::Null,
            ]))
        );
    }

    #[test]
    fn test_wide_integers() {
        let big = JsonValue::Array(vec![
            JsonValue::from(1),
            JsonValue::from(5_000_000_000_i64),
        ]);
        assert_eq!(
            decode(&big).unwrap(),
            RValue::Vector(Vector::from(vec![1.0, 5e9]))
        );

        let options = DecodeOptions::new().with_bigint(BigIntPolicy::Exact);
        assert_eq!(
            Decoder::new(&options).decode(&big).unwrap(),
            RValue::Vector(Vector::from(vec![BigInt::from(1), BigInt::from(5_000_000_000_i64)]))
        );
    }

    #[test]
    fn test_table_union_of_keys() {
        let rows = json!([{"a": 1}, {"b": "x", "a": null}, {}]);
        let table = decode(&rows).unwrap();
        let table = table.as_table().unwrap();
        assert_eq!(table.nrow(), 3);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.column("a"), Some(&Vector::from(vec![Some(1), None, None])));
        assert_eq!(
            table.column("b"),
            Some(&Vector::from(vec![None, Some("x"), None]))
        );
    }

    #[test]
    fn test_table_row_names() {
        let rows = json!([{"_row": "a", "x": 1}, {"_row": "b", "x": 2}]);
        let value = decode(&rows).unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(table.ncol(), 1);
        assert_eq!(table.row_names(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_table_conflicts_are_format_errors() {
        let conflicting = json!([{"a": 1}, {"a": [1]}]);
        let err = decode(&conflicting).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("'a'"));

        let mixed = json!([{"a": 1}, {"a": "x"}]);
        assert!(decode(&mixed).unwrap_err().is_format());
    }

    #[test]
    fn test_nested_rows_fall_back_to_list() {
        let nested = json!([{"a": {"b": 1}}, {"a": {"b": 2}}]);
        assert!(matches!(decode(&nested).unwrap(), RValue::List(_)));
    }

    #[test]
    fn test_matrix_and_fallbacks() {
        let m = decode(&json!([[1, 2], [3, 4]])).unwrap();
        let m = m.as_matrix().unwrap();
        assert_eq!((m.nrow(), m.ncol()), (2, 2));
        assert_eq!(m.data(), &Vector::from(vec![1, 3, 2, 4]));

        assert!(matches!(decode(&json!([[1], [2, 3]])).unwrap(), RValue::List(_)));
        assert!(matches!(decode(&json!([[1], ["a"]])).unwrap(), RValue::List(_)));

        let empty_rows = decode(&json!([[], []])).unwrap();
        let empty_rows = empty_rows.as_matrix().unwrap();
        assert_eq!((empty_rows.nrow(), empty_rows.ncol()), (2, 0));
    }

    #[test]
    fn test_empty_array_policies() {
        assert_eq!(
            decode(&json!([])).unwrap(),
            RValue::List(List::unnamed(vec![]))
        );

        let options = DecodeOptions::new().with_empty_array(EmptyArrayPolicy::LogicalVector);
        assert_eq!(
            Decoder::new(&options).decode(&json!([])).unwrap(),
            RValue::Vector(Vector::Logical(vec![]))
        );

        let options = DecodeOptions::new().with_empty_array(EmptyArrayPolicy::Reject);
        let err = Decoder::new(&options)
            .decode(&json!({"x": []}))
            .unwrap_err();
        assert_eq!(err, Error::AmbiguousDecode("$.x".to_string()));
    }

    #[test]
    fn test_objects_and_primitives() {
        let value = decode(&json!({"n": 1, "z": null, "v": [true]})).unwrap();
        assert_eq!(
            value,
            RValue::List(List::named(vec![
                ("n".to_string(), RValue::scalar(vec![1])),
                ("z".to_string(), RValue::Null),
                ("v".to_string(), RValue::Vector(Vector::from(vec![true]))),
            ]))
        );
        assert_eq!(decode(&JsonValue::Null).unwrap(), RValue::Null);
    }

    #[test]
    fn test_simplification_switches() {
        let options = DecodeOptions::new().with_simplify_vector(false);
        let value = Decoder::new(&options).decode(&json!([1, null])).unwrap();
        assert_eq!(
            value,
            RValue::List(List::unnamed(vec![RValue::scalar(vec![1]), RValue::Null]))
        );

        let options = DecodeOptions::new().with_simplify_table(false);
        let value = Decoder::new(&options).decode(&json!([{"a": 1}])).unwrap();
        assert!(matches!(value, RValue::List(_)));
    }
}
