//! Error types for shape-aware JSON encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Unsupported shapes**: a source value with no encoding rule
//! - **Format errors**: malformed JSON text ([`Error::Syntax`]) or table rows that
//!   cannot be reconciled into one column set ([`Error::Format`])
//! - **Invalid shapes**: constructor validation (matrix extents, ragged tables)
//! - **Ambiguous decodes**: an empty array when the caller asked to reject them
//! - **I/O errors**: reader/writer failures
//!
//! Every error raised while walking a value names the JSON path of the offending
//! element, e.g. `$[2].carrier`.
//!
//! ## Examples
//!
//! ```rust
//! use shapejson::{from_str, Error};
//!
//! let result = from_str("[1, 2,");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.is_format());
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use serde_json::error::Category;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by encoding, decoding and value construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// Structurally inconsistent text form, such as irreconcilable table rows
    #[error("Format error at {path}: {msg}")]
    Format { path: String, msg: String },

    /// A source value whose shape has no encoding rule
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),

    /// Constructor validation failure
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Decode target is underspecified
    #[error("Ambiguous decode at {0}: an empty array may be an empty vector or an empty list")]
    AmbiguousDecode(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line, column and a snippet of the offending line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapejson::Error;
    ///
    /// let err = Error::syntax(3, 7, "expected ','", "  [1 2]");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a format error for the value at `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapejson::Error;
    ///
    /// let err = Error::format("$[1]", "column 'dest' mixes text and numbers");
    /// assert!(err.is_format());
    /// assert!(err.to_string().contains("$[1]"));
    /// ```
    pub fn format(path: &str, msg: &str) -> Self {
        Error::Format {
            path: path.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported shape error.
    pub fn unsupported_shape<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedShape(msg.to_string())
    }

    /// Creates an invalid shape error for values that fail construction checks.
    pub fn invalid_shape<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidShape(msg.to_string())
    }

    /// Creates an ambiguous decode error for the empty array at `path`.
    pub fn ambiguous_decode(path: &str) -> Self {
        Error::AmbiguousDecode(path.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Converts a `serde_json` error, quoting the offending line of `text` for
    /// syntax errors.
    pub(crate) fn from_json(err: serde_json::Error, text: &str) -> Self {
        match err.classify() {
            Category::Io => Error::Io(err.to_string()),
            Category::Syntax | Category::Eof => {
                let context = text.lines().nth(err.line().saturating_sub(1)).unwrap_or("");
                Error::syntax(err.line(), err.column(), &err.to_string(), context)
            }
            Category::Data => Error::Custom(err.to_string()),
        }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for malformed text and for irreconcilable structure.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Error::Syntax { .. } | Error::Format { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::from_json(err, "")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
