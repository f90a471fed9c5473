//! Shape-tagged source values.
//!
//! [`RValue`] is the in-memory side of every mapping. Its variant is the *shape
//! tag* that selects an encoding rule:
//!
//! - [`RValue::Vector`]: a homogeneous [`Vector`] of one element kind
//! - [`RValue::Scalar`]: an explicitly unboxed one-element vector
//! - [`RValue::Matrix`]: a vector with row and column extents
//! - [`RValue::List`]: recursive, optionally labelled elements
//! - [`RValue::Table`]: equal-length labelled columns
//! - [`RValue::Null`]: the empty object
//!
//! Real numbers use [`Double`] so that NA, NaN, +Inf and -Inf stay four distinct
//! states, and every other kind marks a missing element with `None`.
//!
//! ## Examples
//!
//! ```rust
//! use shapejson::{Double, RValue, Table, Vector};
//!
//! let delays = Vector::from(vec![Some(2.0), None, Some(-4.0)]);
//! assert_eq!(delays.len(), 3);
//! assert!(delays.is_na(1));
//!
//! let flights = Table::new(vec![
//!     ("carrier".to_string(), Vector::from(vec!["UA", "AA", "B6"])),
//!     ("dep_delay".to_string(), delays),
//! ])
//! .unwrap();
//! assert_eq!(flights.nrow(), 3);
//!
//! let value = RValue::from(flights);
//! assert_eq!(value.shape_name(), "table");
//! ```

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt;

/// A real number, including the source language's missing marker.
///
/// # Examples
///
/// ```rust
/// use shapejson::Double;
///
/// assert_eq!(Double::from(f64::NAN), Double::NaN);
/// assert_eq!(Double::from(f64::NEG_INFINITY), Double::NegativeInfinity);
/// assert_ne!(Double::NA, Double::NaN);
/// assert_eq!(Double::from(21.0).as_f64(), Some(21.0));
/// assert_eq!(Double::NA.as_f64(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Double {
    Finite(f64),
    NA,
    NaN,
    Infinity,
    NegativeInfinity,
}

impl Double {
    #[inline]
    #[must_use]
    pub const fn is_na(&self) -> bool {
        matches!(self, Double::NA)
    }

    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Double::Finite(_))
    }

    /// The value as an `f64`; `None` only for NA.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Double::Finite(f) => Some(*f),
            Double::NA => None,
            Double::NaN => Some(f64::NAN),
            Double::Infinity => Some(f64::INFINITY),
            Double::NegativeInfinity => Some(f64::NEG_INFINITY),
        }
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Double::NaN
        } else if value == f64::INFINITY {
            Double::Infinity
        } else if value == f64::NEG_INFINITY {
            Double::NegativeInfinity
        } else {
            Double::Finite(value)
        }
    }
}

impl From<Option<f64>> for Double {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Double::NA, Double::from)
    }
}

/// A complex number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
}

/// A categorical vector: level labels plus one 0-based level index per element.
///
/// # Examples
///
/// ```rust
/// use shapejson::Factor;
///
/// let origin = Factor::from_labels(&[Some("EWR"), Some("JFK"), None, Some("EWR")]);
/// assert_eq!(origin.levels(), &["EWR".to_string(), "JFK".to_string()]);
/// assert_eq!(origin.codes(), &[Some(0), Some(1), None, Some(0)]);
/// assert_eq!(origin.label(3), Some("EWR"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Factor {
    levels: Vec<String>,
    codes: Vec<Option<usize>>,
}

impl Factor {
    /// Builds a factor from explicit levels and codes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when a code points past the last level.
    pub fn new(levels: Vec<String>, codes: Vec<Option<usize>>) -> Result<Self> {
        if let Some(bad) = codes.iter().flatten().find(|c| **c >= levels.len()) {
            return Err(Error::invalid_shape(format!(
                "factor code {} out of range for {} levels",
                bad,
                levels.len()
            )));
        }
        Ok(Factor { levels, codes })
    }

    /// Builds a factor whose levels are the distinct labels in first-seen order.
    #[must_use]
    pub fn from_labels(labels: &[Option<&str>]) -> Self {
        let mut levels: IndexMap<String, ()> = IndexMap::new();
        let codes = labels
            .iter()
            .map(|label| {
                label.map(|l| {
                    let (index, _) = levels.insert_full(l.to_string(), ());
                    index
                })
            })
            .collect();
        Factor {
            levels: levels.into_keys().collect(),
            codes,
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    #[must_use]
    pub fn codes(&self) -> &[Option<usize>] {
        &self.codes
    }

    /// The level label of element `i`, or `None` when missing.
    #[must_use]
    pub fn label(&self, i: usize) -> Option<&str> {
        self.codes
            .get(i)
            .copied()
            .flatten()
            .map(|c| self.levels[c].as_str())
    }

    fn select(&self, indices: &[usize]) -> Self {
        Factor {
            levels: self.levels.clone(),
            codes: indices.iter().map(|&i| self.codes[i]).collect(),
        }
    }
}

/// The element kind of a [`Vector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Logical,
    Integer,
    Double,
    Complex,
    Text,
    BigInt,
    Factor,
    Date,
    DateTime,
}

impl VectorKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            VectorKind::Logical => "logical",
            VectorKind::Integer => "integer",
            VectorKind::Double => "double",
            VectorKind::Complex => "complex",
            VectorKind::Text => "character",
            VectorKind::BigInt => "integer64",
            VectorKind::Factor => "factor",
            VectorKind::Date => "Date",
            VectorKind::DateTime => "POSIXct",
        }
    }

    /// Numeric kinds distinguish several missing states and mark them with
    /// quoted tokens under the default policy.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            VectorKind::Integer | VectorKind::Double | VectorKind::Complex | VectorKind::BigInt
        )
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, homogeneous sequence of one element kind.
///
/// Missing elements are `None`, except for [`Double`] which carries its own NA.
#[derive(Clone, Debug, PartialEq)]
pub enum Vector {
    Logical(Vec<Option<bool>>),
    Integer(Vec<Option<i32>>),
    Double(Vec<Double>),
    Complex(Vec<Option<Complex>>),
    Text(Vec<Option<String>>),
    BigInt(Vec<Option<BigInt>>),
    Factor(Factor),
    Date(Vec<Option<NaiveDate>>),
    DateTime(Vec<Option<DateTime<Utc>>>),
}

impl Vector {
    /// An empty vector of `kind`.
    #[must_use]
    pub fn empty(kind: VectorKind) -> Self {
        match kind {
            VectorKind::Logical => Vector::Logical(Vec::new()),
            VectorKind::Integer => Vector::Integer(Vec::new()),
            VectorKind::Double => Vector::Double(Vec::new()),
            VectorKind::Complex => Vector::Complex(Vec::new()),
            VectorKind::Text => Vector::Text(Vec::new()),
            VectorKind::BigInt => Vector::BigInt(Vec::new()),
            VectorKind::Factor => Vector::Factor(Factor {
                levels: Vec::new(),
                codes: Vec::new(),
            }),
            VectorKind::Date => Vector::Date(Vec::new()),
            VectorKind::DateTime => Vector::DateTime(Vec::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> VectorKind {
        match self {
            Vector::Logical(_) => VectorKind::Logical,
            Vector::Integer(_) => VectorKind::Integer,
            Vector::Double(_) => VectorKind::Double,
            Vector::Complex(_) => VectorKind::Complex,
            Vector::Text(_) => VectorKind::Text,
            Vector::BigInt(_) => VectorKind::BigInt,
            Vector::Factor(_) => VectorKind::Factor,
            Vector::Date(_) => VectorKind::Date,
            Vector::DateTime(_) => VectorKind::DateTime,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Vector::Logical(v) => v.len(),
            Vector::Integer(v) => v.len(),
            Vector::Double(v) => v.len(),
            Vector::Complex(v) => v.len(),
            Vector::Text(v) => v.len(),
            Vector::BigInt(v) => v.len(),
            Vector::Factor(f) => f.codes.len(),
            Vector::Date(v) => v.len(),
            Vector::DateTime(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when element `i` holds the missing marker.
    ///
    /// NaN and infinities are not missing.
    #[must_use]
    pub fn is_na(&self, i: usize) -> bool {
        match self {
            Vector::Logical(v) => v[i].is_none(),
            Vector::Integer(v) => v[i].is_none(),
            Vector::Double(v) => v[i].is_na(),
            Vector::Complex(v) => v[i].is_none(),
            Vector::Text(v) => v[i].is_none(),
            Vector::BigInt(v) => v[i].is_none(),
            Vector::Factor(f) => f.codes[i].is_none(),
            Vector::Date(v) => v[i].is_none(),
            Vector::DateTime(v) => v[i].is_none(),
        }
    }

    /// A new vector holding the elements at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        fn pick<T: Clone>(v: &[T], indices: &[usize]) -> Vec<T> {
            indices.iter().map(|&i| v[i].clone()).collect()
        }

        match self {
            Vector::Logical(v) => Vector::Logical(pick(v, indices)),
            Vector::Integer(v) => Vector::Integer(pick(v, indices)),
            Vector::Double(v) => Vector::Double(pick(v, indices)),
            Vector::Complex(v) => Vector::Complex(pick(v, indices)),
            Vector::Text(v) => Vector::Text(pick(v, indices)),
            Vector::BigInt(v) => Vector::BigInt(pick(v, indices)),
            Vector::Factor(f) => Vector::Factor(f.select(indices)),
            Vector::Date(v) => Vector::Date(pick(v, indices)),
            Vector::DateTime(v) => Vector::DateTime(pick(v, indices)),
        }
    }

    /// Numeric view of logical, integer, double and big integer vectors.
    ///
    /// Useful for comparing values whose kind may change on a round trip, such as
    /// a whole-valued double vector that decodes as integers.
    #[must_use]
    pub fn to_doubles(&self) -> Option<Vec<Double>> {
        match self {
            Vector::Logical(v) => Some(
                v.iter()
                    .map(|b| b.map_or(Double::NA, |b| Double::Finite(f64::from(u8::from(b)))))
                    .collect(),
            ),
            Vector::Integer(v) => Some(
                v.iter()
                    .map(|i| i.map_or(Double::NA, |i| Double::Finite(f64::from(i))))
                    .collect(),
            ),
            Vector::Double(v) => Some(v.clone()),
            Vector::BigInt(v) => Some(
                v.iter()
                    .map(|b| {
                        b.as_ref().map_or(Double::NA, |b| {
                            Double::from(b.to_string().parse::<f64>().unwrap_or(f64::NAN))
                        })
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl From<Vec<bool>> for Vector {
    fn from(value: Vec<bool>) -> Self {
        Vector::Logical(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<bool>>> for Vector {
    fn from(value: Vec<Option<bool>>) -> Self {
        Vector::Logical(value)
    }
}

impl From<Vec<i32>> for Vector {
    fn from(value: Vec<i32>) -> Self {
        Vector::Integer(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i32>>> for Vector {
    fn from(value: Vec<Option<i32>>) -> Self {
        Vector::Integer(value)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::Double(value.into_iter().map(Double::from).collect())
    }
}

impl From<Vec<Option<f64>>> for Vector {
    fn from(value: Vec<Option<f64>>) -> Self {
        Vector::Double(value.into_iter().map(Double::from).collect())
    }
}

impl From<Vec<Double>> for Vector {
    fn from(value: Vec<Double>) -> Self {
        Vector::Double(value)
    }
}

impl From<Vec<Complex>> for Vector {
    fn from(value: Vec<Complex>) -> Self {
        Vector::Complex(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Complex>>> for Vector {
    fn from(value: Vec<Option<Complex>>) -> Self {
        Vector::Complex(value)
    }
}

impl From<Vec<&str>> for Vector {
    fn from(value: Vec<&str>) -> Self {
        Vector::Text(value.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<&str>>> for Vector {
    fn from(value: Vec<Option<&str>>) -> Self {
        Vector::Text(value.into_iter().map(|s| s.map(str::to_string)).collect())
    }
}

impl From<Vec<String>> for Vector {
    fn from(value: Vec<String>) -> Self {
        Vector::Text(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<String>>> for Vector {
    fn from(value: Vec<Option<String>>) -> Self {
        Vector::Text(value)
    }
}

impl From<Vec<BigInt>> for Vector {
    fn from(value: Vec<BigInt>) -> Self {
        Vector::BigInt(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<NaiveDate>> for Vector {
    fn from(value: Vec<NaiveDate>) -> Self {
        Vector::Date(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<DateTime<Utc>>> for Vector {
    fn from(value: Vec<DateTime<Utc>>) -> Self {
        Vector::DateTime(value.into_iter().map(Some).collect())
    }
}

impl From<Factor> for Vector {
    fn from(value: Factor) -> Self {
        Vector::Factor(value)
    }
}

/// A vector with row and column extents, stored column-major.
///
/// # Examples
///
/// ```rust
/// use shapejson::{Matrix, Vector};
///
/// let m = Matrix::from_row_major(Vector::from((1..=6).collect::<Vec<i32>>()), 2, 3).unwrap();
/// assert_eq!(m.nrow(), 2);
/// assert_eq!(m.ncol(), 3);
/// // Column-major storage: first column is 1, 4
/// assert_eq!(m.data(), &Vector::from(vec![1, 4, 2, 5, 3, 6]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vector,
    nrow: usize,
    ncol: usize,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
}

impl Matrix {
    /// Builds a matrix from column-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when `nrow * ncol` differs from the data length.
    pub fn new(data: Vector, nrow: usize, ncol: usize) -> Result<Self> {
        if nrow.checked_mul(ncol) != Some(data.len()) {
            return Err(Error::invalid_shape(format!(
                "matrix of {} x {} cannot hold {} elements",
                nrow,
                ncol,
                data.len()
            )));
        }
        Ok(Matrix {
            data,
            nrow,
            ncol,
            row_names: None,
            col_names: None,
        })
    }

    /// Builds a matrix from data laid out row by row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when `nrow * ncol` differs from the data length.
    pub fn from_row_major(data: Vector, nrow: usize, ncol: usize) -> Result<Self> {
        if nrow.checked_mul(ncol) != Some(data.len()) {
            return Self::new(data, nrow, ncol);
        }
        let indices: Vec<usize> = (0..ncol)
            .flat_map(|c| (0..nrow).map(move |r| r * ncol + c))
            .collect();
        Self::new(data.select(&indices), nrow, ncol)
    }

    /// Attaches row labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when the label count differs from `nrow`.
    pub fn with_row_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.nrow {
            return Err(Error::invalid_shape(format!(
                "{} row names for {} rows",
                names.len(),
                self.nrow
            )));
        }
        self.row_names = Some(names);
        Ok(self)
    }

    /// Attaches column labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when the label count differs from `ncol`.
    pub fn with_col_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.ncol {
            return Err(Error::invalid_shape(format!(
                "{} column names for {} columns",
                names.len(),
                self.ncol
            )));
        }
        self.col_names = Some(names);
        Ok(self)
    }

    #[must_use]
    pub fn data(&self) -> &Vector {
        &self.data
    }

    #[must_use]
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    #[must_use]
    pub fn ncol(&self) -> usize {
        self.ncol
    }

    #[must_use]
    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    #[must_use]
    pub fn col_names(&self) -> Option<&[String]> {
        self.col_names.as_deref()
    }

    /// Position of element (`row`, `col`) in the column-major data.
    #[inline]
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        col * self.nrow + row
    }
}

/// How the elements of a [`List`] are labelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Naming {
    Unnamed,
    Named,
    Partial,
}

/// An ordered sequence of values, each optionally labelled.
///
/// # Examples
///
/// ```rust
/// use shapejson::{List, Naming, RValue, Vector};
///
/// let list = List::named(vec![
///     ("origin".to_string(), RValue::from(Vector::from(vec!["JFK"]))),
///     ("n".to_string(), RValue::from(Vector::from(vec![111279]))),
/// ]);
/// assert_eq!(list.naming(), Naming::Named);
/// assert!(list.get("n").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct List {
    elements: Vec<RValue>,
    names: Option<Vec<Option<String>>>,
}

impl List {
    /// A list without labels.
    #[must_use]
    pub fn unnamed(elements: Vec<RValue>) -> Self {
        List {
            elements,
            names: None,
        }
    }

    /// A list with a label at every position.
    #[must_use]
    pub fn named(entries: Vec<(String, RValue)>) -> Self {
        let (names, elements): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|(name, value)| (Some(name), value))
            .unzip();
        List {
            elements,
            names: Some(names),
        }
    }

    /// A list with optional labels; `None` and empty labels count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when the label count differs from the element count.
    pub fn new(elements: Vec<RValue>, names: Vec<Option<String>>) -> Result<Self> {
        if names.len() != elements.len() {
            return Err(Error::invalid_shape(format!(
                "{} names for {} list elements",
                names.len(),
                elements.len()
            )));
        }
        Ok(List {
            elements,
            names: Some(names),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[RValue] {
        &self.elements
    }

    /// The label at position `i`, if any.
    #[must_use]
    pub fn name(&self, i: usize) -> Option<&str> {
        self.names
            .as_ref()
            .and_then(|names| names.get(i))
            .and_then(|n| n.as_deref())
            .filter(|n| !n.is_empty())
    }

    #[must_use]
    pub fn naming(&self) -> Naming {
        let labelled = (0..self.len()).filter(|&i| self.name(i).is_some()).count();
        if self.is_empty() && self.names.is_some() {
            // An empty list with a names attribute is still an object
            Naming::Named
        } else if labelled == 0 {
            Naming::Unnamed
        } else if labelled == self.len() {
            Naming::Named
        } else {
            Naming::Partial
        }
    }

    /// The first element labelled `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RValue> {
        (0..self.len())
            .find(|&i| self.name(i) == Some(name))
            .map(|i| &self.elements[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &RValue)> {
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.name(i), v))
    }
}

/// Equal-length labelled columns.
///
/// The row count is stored explicitly, so a table without columns still knows
/// how many rows it has.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Vector>,
    nrow: usize,
    row_names: Option<Vec<String>>,
}

impl Table {
    /// Builds a table from named columns; the row count is the common length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] for ragged columns or a repeated column label.
    pub fn new(columns: Vec<(String, Vector)>) -> Result<Self> {
        let nrow = columns.first().map_or(0, |(_, c)| c.len());
        Self::with_nrow(nrow, columns)
    }

    /// Builds a table with an explicit row count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when a column length differs from `nrow` or
    /// a column label repeats.
    pub fn with_nrow(nrow: usize, columns: Vec<(String, Vector)>) -> Result<Self> {
        let mut map = IndexMap::with_capacity(columns.len());
        for (name, column) in columns {
            if column.len() != nrow {
                return Err(Error::invalid_shape(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    column.len(),
                    nrow
                )));
            }
            if map.contains_key(&name) {
                return Err(Error::invalid_shape(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
            map.insert(name, column);
        }
        Ok(Table {
            columns: map,
            nrow,
            row_names: None,
        })
    }

    /// Attaches row labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] when the label count differs from the row count.
    pub fn with_row_names(mut self, names: Vec<String>) -> Result<Self> {
        if names.len() != self.nrow {
            return Err(Error::invalid_shape(format!(
                "{} row names for {} rows",
                names.len(),
                self.nrow
            )));
        }
        self.row_names = Some(names);
        Ok(self)
    }

    #[must_use]
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Vector> {
        self.columns.get(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }
}

/// A shape-tagged source value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RValue {
    #[default]
    Null,
    Scalar(Vector),
    Vector(Vector),
    Matrix(Matrix),
    List(List),
    Table(Table),
}

impl RValue {
    /// Wraps a one-element vector as an unboxed scalar.
    #[must_use]
    pub fn scalar(value: impl Into<Vector>) -> Self {
        RValue::Scalar(value.into())
    }

    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            RValue::Null => "null",
            RValue::Scalar(_) => "scalar",
            RValue::Vector(_) => "vector",
            RValue::Matrix(_) => "matrix",
            RValue::List(_) => "list",
            RValue::Table(_) => "table",
        }
    }

    #[must_use]
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            RValue::Vector(v) | RValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            RValue::Matrix(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            RValue::List(l) => Some(l),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            RValue::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Vector> for RValue {
    fn from(value: Vector) -> Self {
        RValue::Vector(value)
    }
}

impl From<Matrix> for RValue {
    fn from(value: Matrix) -> Self {
        RValue::Matrix(value)
    }
}

impl From<List> for RValue {
    fn from(value: List) -> Self {
        RValue::List(value)
    }
}

impl From<Table> for RValue {
    fn from(value: Table) -> Self {
        RValue::Table(value)
    }
}
