//! Shape-directed encoding.
//!
//! The [`Encoder`] converts an [`RValue`] into a [`JsonValue`] with one rule per
//! shape tag:
//!
//! - **Vector**: array of primitives
//! - **Scalar**: bare primitive
//! - **Matrix**: array of row arrays (or column arrays with
//!   [`MatrixLayout::ColumnMajor`])
//! - **Unnamed list**: array; **named list**: object
//! - **Table**: array of row objects, object of columns, or array of row arrays
//! - **Null**: `{}` or `null`; always `{}` inside an unnamed list
//!
//! Vectors are normalized first (see [`crate::normalize`]), so the per-element
//! rules only deal with logical, integer, real, complex, text and big integer
//! elements.
//!
//! ## Missing values
//!
//! ```rust
//! use shapejson::{to_string, Double, RValue, Vector};
//!
//! let x = Vector::Double(vec![
//!     Double::Finite(3.14),
//!     Double::NA,
//!     Double::NaN,
//!     Double::Finite(21.0),
//!     Double::Infinity,
//!     Double::NegativeInfinity,
//! ]);
//! assert_eq!(to_string(&RValue::from(x)).unwrap(), r#"[3.14,"NA","NaN",21,"Inf","-Inf"]"#);
//! ```

use crate::json::{big, real};
use crate::normalize::normalize;
use crate::value::{Complex, Double, List, Matrix, Naming, RValue, Table, Vector};
use crate::{
    ComplexFormat, EncodeOptions, Error, JsonMap, JsonValue, MatrixLayout, NaPolicy,
    NullFormat, Result, TableLayout,
};

/// Key under which table row labels are written.
pub const ROW_NAMES_KEY: &str = "_row";

/// Where a value sits relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Top,
    Member,
    Element,
}

/// Where a vector element is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// A positional slot: vector, scalar, matrix or value-table cell
    Positional,
    /// A row-object member, which may be omitted
    Cell,
}

/// Encodes source values under a fixed set of options.
///
/// # Examples
///
/// ```rust
/// use shapejson::{EncodeOptions, Encoder, JsonValue, RValue};
///
/// let options = EncodeOptions::new();
/// let encoder = Encoder::new(&options);
/// assert_eq!(encoder.encode(&RValue::Null).unwrap(), JsonValue::Object(Default::default()));
/// ```
pub struct Encoder<'o> {
    options: &'o EncodeOptions,
}

impl<'o> Encoder<'o> {
    pub fn new(options: &'o EncodeOptions) -> Self {
        Encoder { options }
    }

    /// Encodes `value` as a top-level document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedShape`] for a scalar that does not hold exactly
    /// one element, a repeated list label, or a complex column written as a
    /// nested object inside a row layout.
    pub fn encode(&self, value: &RValue) -> Result<JsonValue> {
        self.encode_at(value, "$", Position::Top)
    }

    fn encode_at(&self, value: &RValue, path: &str, position: Position) -> Result<JsonValue> {
        match value {
            // A bare null may not sit next to structural siblings either
            RValue::Null => Ok(match (self.options.null, position) {
                (NullFormat::Null, Position::Top | Position::Member) => JsonValue::Null,
                (NullFormat::List, _) | (NullFormat::Null, Position::Element) => {
                    JsonValue::Object(JsonMap::new())
                }
            }),
            RValue::Scalar(vector) => {
                let scalar = self.encode_scalar(vector, path)?;
                // A bare primitive may not sit next to structural siblings
                if position == Position::Element {
                    Ok(JsonValue::Array(vec![scalar]))
                } else {
                    Ok(scalar)
                }
            }
            RValue::Vector(vector) => {
                if self.options.auto_unbox && vector.len() == 1 && position != Position::Element
                {
                    self.encode_scalar(vector, path)
                } else {
                    self.encode_vector(vector, path)
                }
            }
            RValue::Matrix(matrix) => self.encode_matrix(matrix, path),
            RValue::List(list) => self.encode_list(list, path),
            RValue::Table(table) => self.encode_table(table, path),
        }
    }

    fn encode_vector(&self, vector: &Vector, path: &str) -> Result<JsonValue> {
        let vector = normalize(vector, self.options);
        if let (Vector::Complex(values), ComplexFormat::List) = (&*vector, self.options.complex) {
            let (re, im) = split_complex(values);
            let mut object = JsonMap::with_capacity(2);
            object.insert("real".to_string(), self.encode_vector(&re, path)?);
            object.insert("imaginary".to_string(), self.encode_vector(&im, path)?);
            return Ok(JsonValue::Object(object));
        }

        let mut items = Vec::with_capacity(vector.len());
        for i in 0..vector.len() {
            items.push(self.positional(&vector, i, path)?);
        }
        Ok(JsonValue::Array(items))
    }

    fn encode_scalar(&self, vector: &Vector, path: &str) -> Result<JsonValue> {
        if vector.len() != 1 {
            return Err(Error::unsupported_shape(format!(
                "scalar at {} holds {} elements, expected exactly one",
                path,
                vector.len()
            )));
        }
        let vector = normalize(vector, self.options);
        if let (Vector::Complex(values), ComplexFormat::List) = (&*vector, self.options.complex) {
            let (re, im) = split_complex(values);
            let mut object = JsonMap::with_capacity(2);
            object.insert("real".to_string(), self.positional(&re, 0, path)?);
            object.insert("imaginary".to_string(), self.positional(&im, 0, path)?);
            return Ok(JsonValue::Object(object));
        }
        self.positional(&vector, 0, path)
    }

    fn encode_matrix(&self, matrix: &Matrix, path: &str) -> Result<JsonValue> {
        let data = normalize(matrix.data(), self.options);
        self.reject_nested_complex(&data, path)?;

        let (outer, inner) = match self.options.matrix {
            MatrixLayout::RowMajor => (matrix.nrow(), matrix.ncol()),
            MatrixLayout::ColumnMajor => (matrix.ncol(), matrix.nrow()),
        };

        let mut rows = Vec::with_capacity(outer);
        for o in 0..outer {
            let mut row = Vec::with_capacity(inner);
            for i in 0..inner {
                let index = match self.options.matrix {
                    MatrixLayout::RowMajor => matrix.index(o, i),
                    MatrixLayout::ColumnMajor => matrix.index(i, o),
                };
                row.push(self.positional(&data, index, path)?);
            }
            rows.push(JsonValue::Array(row));
        }
        Ok(JsonValue::Array(rows))
    }

    fn encode_list(&self, list: &List, path: &str) -> Result<JsonValue> {
        if list.naming() == Naming::Unnamed {
            let mut items = Vec::with_capacity(list.len());
            for (i, element) in list.elements().iter().enumerate() {
                let child = format!("{}[{}]", path, i);
                items.push(self.encode_at(element, &child, Position::Element)?);
            }
            return Ok(JsonValue::Array(items));
        }

        let mut object = JsonMap::with_capacity(list.len());
        for (i, (name, element)) in list.iter().enumerate() {
            // Unlabelled positions take their 1-based index
            let key = name.map_or_else(|| (i + 1).to_string(), str::to_string);
            if object.contains_key(&key) {
                return Err(Error::unsupported_shape(format!(
                    "list at {} repeats the label '{}'",
                    path, key
                )));
            }
            let child = format!("{}.{}", path, key);
            let encoded = self.encode_at(element, &child, Position::Member)?;
            object.insert(key, encoded);
        }
        Ok(JsonValue::Object(object))
    }

    fn encode_table(&self, table: &Table, path: &str) -> Result<JsonValue> {
        let columns: Vec<(&str, _)> = table
            .columns()
            .map(|(name, column)| (name, normalize(column, self.options)))
            .collect();
        let row_names = if self.options.rownames {
            table.row_names()
        } else {
            None
        };
        if row_names.is_some() && table.column(ROW_NAMES_KEY).is_some() {
            return Err(Error::unsupported_shape(format!(
                "table at {} has both row names and a '{}' column",
                path, ROW_NAMES_KEY
            )));
        }

        match self.options.table {
            TableLayout::Rows => {
                for (name, column) in &columns {
                    self.reject_nested_complex(column, &format!("{}.{}", path, name))?;
                }
                let mut rows = Vec::with_capacity(table.nrow());
                for r in 0..table.nrow() {
                    let mut row = JsonMap::with_capacity(columns.len() + 1);
                    if let Some(names) = row_names {
                        row.insert(ROW_NAMES_KEY.to_string(), JsonValue::from(names[r].as_str()));
                    }
                    for (name, column) in &columns {
                        let cell_path = format!("{}[{}].{}", path, r, name);
                        if let Some(cell) = self.element(column, r, Slot::Cell, &cell_path)? {
                            row.insert((*name).to_string(), cell);
                        }
                    }
                    rows.push(JsonValue::Object(row));
                }
                Ok(JsonValue::Array(rows))
            }
            TableLayout::Columns => {
                let mut object = JsonMap::with_capacity(columns.len() + 1);
                if let Some(names) = row_names {
                    object.insert(
                        ROW_NAMES_KEY.to_string(),
                        JsonValue::Array(names.iter().map(|n| JsonValue::from(n.as_str())).collect()),
                    );
                }
                for (name, column) in &columns {
                    let column_path = format!("{}.{}", path, name);
                    object.insert((*name).to_string(), self.encode_vector(column, &column_path)?);
                }
                Ok(JsonValue::Object(object))
            }
            TableLayout::Values => {
                for (name, column) in &columns {
                    self.reject_nested_complex(column, &format!("{}.{}", path, name))?;
                }
                let mut rows = Vec::with_capacity(table.nrow());
                for r in 0..table.nrow() {
                    let mut row = Vec::with_capacity(columns.len());
                    for (_, column) in &columns {
                        row.push(self.positional(column, r, path)?);
                    }
                    rows.push(JsonValue::Array(row));
                }
                Ok(JsonValue::Array(rows))
            }
        }
    }

    /// Complex values written as `{"real":..,"imaginary":..}` cannot be cells.
    fn reject_nested_complex(&self, vector: &Vector, path: &str) -> Result<()> {
        if matches!(vector, Vector::Complex(_)) && self.options.complex == ComplexFormat::List {
            return Err(Error::unsupported_shape(format!(
                "complex values at {} would nest objects inside cells",
                path
            )));
        }
        Ok(())
    }

    fn positional(&self, vector: &Vector, i: usize, path: &str) -> Result<JsonValue> {
        Ok(self
            .element(vector, i, Slot::Positional, path)?
            .unwrap_or(JsonValue::Null))
    }

    /// Encodes element `i` of a normalized vector; `None` means "omit".
    fn element(&self, vector: &Vector, i: usize, slot: Slot, path: &str) -> Result<Option<JsonValue>> {
        let kind = vector.kind();
        let value = match vector {
            Vector::Logical(v) => v[i].map(JsonValue::Bool),
            Vector::Text(v) => v[i].as_ref().map(|s| JsonValue::String(s.clone())),
            Vector::Integer(v) => v[i].map(JsonValue::from),
            Vector::BigInt(v) => v[i].as_ref().map(big).transpose()?,
            Vector::Double(v) => match v[i] {
                Double::Finite(f) => Some(real(self.round(f))),
                Double::NA => None,
                Double::NaN => return Ok(Some(self.special("NaN"))),
                Double::Infinity => return Ok(Some(self.special("Inf"))),
                Double::NegativeInfinity => return Ok(Some(self.special("-Inf"))),
            },
            Vector::Complex(v) => v[i].map(|c| JsonValue::String(self.format_complex(c))),
            Vector::Factor(_) | Vector::Date(_) | Vector::DateTime(_) => {
                return Err(Error::unsupported_shape(format!(
                    "{} vector at {} reached the encoder without normalization",
                    kind, path
                )));
            }
        };

        Ok(match value {
            Some(value) => Some(value),
            None => match (self.options.na, slot) {
                (NaPolicy::Default, Slot::Cell) => None,
                (NaPolicy::Default, Slot::Positional) if kind.is_numeric() => {
                    Some(JsonValue::from("NA"))
                }
                (NaPolicy::Default, Slot::Positional) | (NaPolicy::Null, _) => Some(JsonValue::Null),
                (NaPolicy::String, _) => Some(JsonValue::from("NA")),
            },
        })
    }

    fn special(&self, token: &str) -> JsonValue {
        match self.options.na {
            NaPolicy::Null => JsonValue::Null,
            NaPolicy::Default | NaPolicy::String => JsonValue::from(token),
        }
    }

    fn round(&self, value: f64) -> f64 {
        match self.options.digits {
            Some(digits) if digits > 0 && value != 0.0 => {
                format!("{:.*e}", digits - 1, value)
                    .parse()
                    .unwrap_or(value)
            }
            _ => value,
        }
    }

    fn format_complex(&self, c: Complex) -> String {
        let re = format_part(self.round(c.re));
        let sign = if c.im.is_sign_negative() && !c.im.is_nan() { '-' } else { '+' };
        let im = format_part(self.round(c.im.abs()));
        format!("{}{}{}i", re, sign, im)
    }
}

fn format_part(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        value.to_string()
    }
}

fn split_complex(values: &[Option<Complex>]) -> (Vector, Vector) {
    let re = values.iter().map(|c| Double::from(c.map(|c| c.re))).collect();
    let im = values.iter().map(|c| Double::from(c.map(|c| c.im))).collect();
    (Vector::Double(re), Vector::Double(im))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &RValue, options: &EncodeOptions) -> Result<JsonValue> {
        Encoder::new(options).encode(value)
    }

    #[test]
    fn test_na_policy_by_kind() {
        let logical = RValue::from(Vector::from(vec![Some(true), None]));
        let text = RValue::from(Vector::from(vec![Some("a"), None]));
        let integer = RValue::from(Vector::from(vec![Some(1), None]));

        let default = EncodeOptions::new();
        assert_eq!(encode(&logical, &default).unwrap(), json!([true, null]));
        assert_eq!(encode(&text, &default).unwrap(), json!(["a", null]));
        assert_eq!(encode(&integer, &default).unwrap(), json!([1, "NA"]));

        let strings = EncodeOptions::new().with_na(NaPolicy::String);
        assert_eq!(encode(&logical, &strings).unwrap(), json!([true, "NA"]));
        assert_eq!(encode(&text, &strings).unwrap(), json!(["a", "NA"]));

        let nulls = EncodeOptions::new().with_na(NaPolicy::Null);
        assert_eq!(encode(&integer, &nulls).unwrap(), json!([1, null]));
    }

    #[test]
    fn test_specials_under_null_policy() {
        let x = RValue::from(Vector::from(vec![f64::NAN, f64::INFINITY, 1.5]));
        let options = EncodeOptions::new().with_na(NaPolicy::Null);
        assert_eq!(encode(&x, &options).unwrap(), json!([null, null, 1.5]));

        let options = EncodeOptions::new().with_na(NaPolicy::String);
        assert_eq!(encode(&x, &options).unwrap(), json!(["NaN", "Inf", 1.5]));
    }

    #[test]
    fn test_scalar_length_checked() {
        let options = EncodeOptions::new();
        let bad = RValue::Scalar(Vector::from(vec![1, 2]));
        assert!(matches!(encode(&bad, &options), Err(Error::UnsupportedShape(_))));
        let empty = RValue::Scalar(Vector::from(Vec::<i32>::new()));
        assert!(encode(&empty, &options).is_err());
        assert_eq!(encode(&RValue::scalar(vec![7]), &options).unwrap(), json!(7));
    }

    #[test]
    fn test_scalar_in_unnamed_list_is_wrapped() {
        let list = RValue::from(List::unnamed(vec![
            RValue::scalar(vec!["a"]),
            RValue::from(Vector::from(vec![1, 2])),
        ]));
        assert_eq!(
            encode(&list, &EncodeOptions::new()).unwrap(),
            json!([["a"], [1, 2]])
        );
    }

    #[test]
    fn test_auto_unbox_positions() {
        let options = EncodeOptions::new().with_auto_unbox(true);
        let top = RValue::from(Vector::from(vec![1]));
        assert_eq!(encode(&top, &options).unwrap(), json!(1));

        let list = RValue::from(List::named(vec![
            ("n".to_string(), RValue::from(Vector::from(vec![1]))),
            ("x".to_string(), RValue::from(List::unnamed(vec![RValue::from(Vector::from(vec![2]))]))),
        ]));
        assert_eq!(
            encode(&list, &options).unwrap(),
            json!({"n": 1, "x": [[2]]})
        );
    }

    #[test]
    fn test_partially_named_list_uses_positions() {
        let list = List::new(
            vec![RValue::from(Vector::from(vec![1])), RValue::Null],
            vec![None, Some("b".to_string())],
        )
        .unwrap();
        assert_eq!(
            encode(&RValue::from(list), &EncodeOptions::new()).unwrap(),
            json!({"1": [1], "b": {}})
        );
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let list = List::named(vec![
            ("a".to_string(), RValue::Null),
            ("a".to_string(), RValue::Null),
        ]);
        let err = encode(&RValue::from(list), &EncodeOptions::new()).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_null_format() {
        let options = EncodeOptions::new().with_null(NullFormat::Null);
        assert_eq!(encode(&RValue::Null, &options).unwrap(), JsonValue::Null);

        let named = RValue::from(List::named(vec![("z".to_string(), RValue::Null)]));
        assert_eq!(encode(&named, &options).unwrap(), json!({"z": null}));
    }

    #[test]
    fn test_null_in_unnamed_list_stays_structural() {
        let list = RValue::from(List::unnamed(vec![
            RValue::Null,
            RValue::from(Vector::from(vec![1])),
        ]));
        let options = EncodeOptions::new().with_null(NullFormat::Null);
        assert_eq!(encode(&list, &options).unwrap(), json!([{}, [1]]));
        assert_eq!(encode(&list, &EncodeOptions::new()).unwrap(), json!([{}, [1]]));
    }

    #[test]
    fn test_extreme_reals_use_exponents() {
        let x = RValue::from(Vector::from(vec![1e-300, 1e300]));
        let value = encode(&x, &EncodeOptions::new()).unwrap();
        let text = value.to_string();
        assert!(text.len() < 30, "{}", text);

        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_f64(), Some(1e-300));
        assert_eq!(items[1].as_f64(), Some(1e300));
    }

    #[test]
    fn test_digits() {
        let x = RValue::from(Vector::from(vec![3.14159, 123456.0, 0.0]));
        let options = EncodeOptions::new().with_digits(2);
        assert_eq!(encode(&x, &options).unwrap(), json!([3.1, 120000, 0]));
    }

    #[test]
    fn test_complex_formats() {
        let z = RValue::from(Vector::from(vec![Some(Complex::new(1.0, -2.0)), None]));
        assert_eq!(
            encode(&z, &EncodeOptions::new()).unwrap(),
            json!(["1-2i", "NA"])
        );

        let options = EncodeOptions::new().with_complex(ComplexFormat::List);
        assert_eq!(
            encode(&z, &options).unwrap(),
            json!({"real": [1, "NA"], "imaginary": [-2, "NA"]})
        );

        let table = Table::new(vec![("z".to_string(), Vector::from(vec![Complex::new(0.0, 1.0)]))])
            .unwrap();
        assert!(encode(&RValue::from(table), &options).is_err());
    }

    #[test]
    fn test_matrix_column_major() {
        let m = Matrix::from_row_major(Vector::from(vec![1, 2, 3, 4, 5, 6]), 2, 3).unwrap();
        let options = EncodeOptions::new().with_matrix(MatrixLayout::ColumnMajor);
        assert_eq!(
            encode(&RValue::from(m), &options).unwrap(),
            json!([[1, 4], [2, 5], [3, 6]])
        );
    }

    #[test]
    fn test_table_row_names() {
        let table = Table::new(vec![("mpg".to_string(), Vector::from(vec![21.0, 22.8]))])
            .unwrap()
            .with_row_names(vec!["Mazda RX4".to_string(), "Datsun 710".to_string()])
            .unwrap();
        let value = RValue::from(table);
        assert_eq!(
            encode(&value, &EncodeOptions::new()).unwrap(),
            json!([{"_row": "Mazda RX4", "mpg": 21}, {"_row": "Datsun 710", "mpg": 22.8}])
        );
        assert_eq!(
            encode(&value, &EncodeOptions::new().with_rownames(false)).unwrap(),
            json!([{"mpg": 21}, {"mpg": 22.8}])
        );
    }

    #[test]
    fn test_table_layouts() {
        let table = RValue::from(
            Table::new(vec![
                ("a".to_string(), Vector::from(vec![Some(1), None])),
                ("b".to_string(), Vector::from(vec!["x", "y"])),
            ])
            .unwrap(),
        );
        assert_eq!(
            encode(&table, &EncodeOptions::new()).unwrap(),
            json!([{"a": 1, "b": "x"}, {"b": "y"}])
        );
        assert_eq!(
            encode(&table, &EncodeOptions::new().with_na(NaPolicy::Null)).unwrap(),
            json!([{"a": 1, "b": "x"}, {"a": null, "b": "y"}])
        );
        assert_eq!(
            encode(&table, &EncodeOptions::new().with_table(TableLayout::Columns)).unwrap(),
            json!({"a": [1, "NA"], "b": ["x", "y"]})
        );
        assert_eq!(
            encode(&table, &EncodeOptions::new().with_table(TableLayout::Values)).unwrap(),
            json!([[1, "x"], ["NA", "y"]])
        );
    }
}
