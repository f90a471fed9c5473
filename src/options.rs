//! Configuration options for encoding and decoding.
//!
//! - [`EncodeOptions`]: how source values map to JSON (missing values, layouts,
//!   coercions, pretty-printing)
//! - [`DecodeOptions`]: which simplifications the decoder applies
//!
//! Defaults follow jsonlite's conventions.
//!
//! ## Examples
//!
//! ```rust
//! use shapejson::{to_string_with_options, EncodeOptions, NaPolicy, Vector};
//!
//! let heights = Vector::from(vec![Some(1.5), None]);
//!
//! let json = to_string_with_options(&heights.clone().into(), EncodeOptions::new()).unwrap();
//! assert_eq!(json, r#"[1.5,"NA"]"#);
//!
//! let options = EncodeOptions::new().with_na(NaPolicy::Null);
//! let json = to_string_with_options(&heights.into(), options).unwrap();
//! assert_eq!(json, "[1.5,null]");
//! ```

/// Missing-value policy for vectors and table cells.
///
/// | Policy | boolean / text NA | numeric NA | NaN, ±Inf | table cell NA |
/// |---|---|---|---|---|
/// | `Default` | `null` | `"NA"` | `"NaN"`, `"Inf"`, `"-Inf"` | key omitted |
/// | `Null` | `null` | `null` | `null` | `null` |
/// | `String` | `"NA"` | `"NA"` | `"NaN"`, `"Inf"`, `"-Inf"` | `"NA"` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NaPolicy {
    #[default]
    Default,
    Null,
    String,
}

/// Layout used for tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Array of row objects: `[{"a":1,"b":"x"}, ...]`
    #[default]
    Rows,
    /// Object of column arrays: `{"a":[1,...],"b":["x",...]}`
    Columns,
    /// Array of row arrays without names: `[[1,"x"], ...]`
    Values,
}

/// Direction along which matrices are split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatrixLayout {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// Encoding of factor vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FactorFormat {
    /// The level label of each element
    #[default]
    String,
    /// The 1-based level code of each element
    Integer,
}

/// Encoding of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `"2013-01-01"`
    #[default]
    Iso8601,
    /// Days since 1970-01-01
    Epoch,
}

/// Encoding of UTC date-times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateTimeFormat {
    /// `"2013-01-01 05:15:00"`
    #[default]
    String,
    /// `"2013-01-01T05:15:00Z"`
    Iso8601,
    /// Milliseconds since the Unix epoch
    Epoch,
}

/// Encoding of complex vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ComplexFormat {
    /// `"1+2i"`
    #[default]
    String,
    /// `{"real":[1],"imaginary":[2]}`
    List,
}

/// Encoding of the source language's null object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NullFormat {
    /// `{}`
    #[default]
    List,
    /// `null` at the top level and as a list member; `{}` inside an unnamed list
    Null,
}

/// Configuration for the encoder.
///
/// # Examples
///
/// ```rust
/// use shapejson::{EncodeOptions, MatrixLayout, TableLayout};
///
/// // jsonlite defaults, compact output
/// let options = EncodeOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with 4-space indentation and column-major matrices
/// let options = EncodeOptions::pretty()
///     .with_indent(4)
///     .with_matrix(MatrixLayout::ColumnMajor)
///     .with_table(TableLayout::Columns);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeOptions {
    pub pretty: bool,
    pub indent: usize,
    pub na: NaPolicy,
    pub table: TableLayout,
    pub matrix: MatrixLayout,
    pub auto_unbox: bool,
    pub digits: Option<usize>,
    pub factor: FactorFormat,
    pub date: DateFormat,
    pub datetime: DateTimeFormat,
    pub complex: ComplexFormat,
    pub null: NullFormat,
    pub bigint_as_char: bool,
    pub rownames: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            pretty: false,
            indent: 2,
            na: NaPolicy::default(),
            table: TableLayout::default(),
            matrix: MatrixLayout::default(),
            auto_unbox: false,
            digits: None,
            factor: FactorFormat::default(),
            date: DateFormat::default(),
            datetime: DateTimeFormat::default(),
            complex: ComplexFormat::default(),
            null: NullFormat::default(),
            bigint_as_char: false,
            rownames: true,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (compact output, jsonlite conventions).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapejson::EncodeOptions;
    ///
    /// assert!(EncodeOptions::pretty().pretty);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the missing-value policy.
    #[must_use]
    pub fn with_na(mut self, na: NaPolicy) -> Self {
        self.na = na;
        self
    }

    /// Sets the table layout.
    #[must_use]
    pub fn with_table(mut self, table: TableLayout) -> Self {
        self.table = table;
        self
    }

    /// Sets the matrix layout.
    #[must_use]
    pub fn with_matrix(mut self, matrix: MatrixLayout) -> Self {
        self.matrix = matrix;
        self
    }

    /// Encodes length-1 vectors as bare primitives where the output stays unambiguous
    /// (top level and named-list members).
    #[must_use]
    pub fn with_auto_unbox(mut self, auto_unbox: bool) -> Self {
        self.auto_unbox = auto_unbox;
        self
    }

    /// Rounds real numbers to `digits` significant digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapejson::{to_string_with_options, EncodeOptions, Vector};
    ///
    /// let v = Vector::from(vec![3.14159, 2.71828]);
    /// let json = to_string_with_options(&v.into(), EncodeOptions::new().with_digits(3)).unwrap();
    /// assert_eq!(json, "[3.14,2.72]");
    /// ```
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }

    /// Sets the factor encoding.
    #[must_use]
    pub fn with_factor(mut self, factor: FactorFormat) -> Self {
        self.factor = factor;
        self
    }

    /// Sets the date encoding.
    #[must_use]
    pub fn with_date(mut self, date: DateFormat) -> Self {
        self.date = date;
        self
    }

    /// Sets the date-time encoding.
    #[must_use]
    pub fn with_datetime(mut self, datetime: DateTimeFormat) -> Self {
        self.datetime = datetime;
        self
    }

    /// Sets the complex number encoding.
    #[must_use]
    pub fn with_complex(mut self, complex: ComplexFormat) -> Self {
        self.complex = complex;
        self
    }

    /// Sets the null object encoding.
    #[must_use]
    pub fn with_null(mut self, null: NullFormat) -> Self {
        self.null = null;
        self
    }

    /// Writes big integers as quoted decimal strings instead of number literals.
    #[must_use]
    pub fn with_bigint_as_char(mut self, bigint_as_char: bool) -> Self {
        self.bigint_as_char = bigint_as_char;
        self
    }

    /// Controls whether table row labels are written under the `"_row"` key.
    #[must_use]
    pub fn with_rownames(mut self, rownames: bool) -> Self {
        self.rownames = rownames;
        self
    }
}

/// What an empty JSON array decodes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyArrayPolicy {
    /// An empty unnamed list
    #[default]
    List,
    /// An empty logical vector
    LogicalVector,
    /// Fail with [`crate::Error::AmbiguousDecode`]
    Reject,
}

/// How integer literals outside the 32-bit range decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BigIntPolicy {
    /// Widen to real numbers
    #[default]
    Double,
    /// Keep exact values in a big integer vector
    Exact,
}

/// Configuration for the decoder.
///
/// # Examples
///
/// ```rust
/// use shapejson::{from_str_with_options, DecodeOptions, RValue};
///
/// let options = DecodeOptions::new().with_simplify_matrix(false);
/// let value = from_str_with_options("[[1,2],[3,4]]", options).unwrap();
/// assert!(matches!(value, RValue::List(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    pub simplify_vector: bool,
    pub simplify_table: bool,
    pub simplify_matrix: bool,
    pub empty_array: EmptyArrayPolicy,
    pub bigint: BigIntPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            simplify_vector: true,
            simplify_table: true,
            simplify_matrix: true,
            empty_array: EmptyArrayPolicy::default(),
            bigint: BigIntPolicy::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (every simplification enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_simplify_vector(mut self, simplify: bool) -> Self {
        self.simplify_vector = simplify;
        self
    }

    #[must_use]
    pub fn with_simplify_table(mut self, simplify: bool) -> Self {
        self.simplify_table = simplify;
        self
    }

    #[must_use]
    pub fn with_simplify_matrix(mut self, simplify: bool) -> Self {
        self.simplify_matrix = simplify;
        self
    }

    #[must_use]
    pub fn with_empty_array(mut self, policy: EmptyArrayPolicy) -> Self {
        self.empty_array = policy;
        self
    }

    #[must_use]
    pub fn with_bigint(mut self, policy: BigIntPolicy) -> Self {
        self.bigint = policy;
        self
    }
}
