//! JSON text output.
//!
//! Compact output is `serde_json`'s own. Pretty output runs the same serializer
//! through [`ShapeFormatter`], which indents structures by
//! [`EncodeOptions::indent`] spaces per level and keeps arrays of primitives on
//! one line, so an encoded vector reads as `[1, 2, 3]` and an encoded matrix as
//! one line per row:
//!
//! ```text
//! [
//!   [1, 2, 3, 4],
//!   [5, 6, 7, 8]
//! ]
//! ```
//!
//! Pretty-printing only changes whitespace; both forms parse to the same value.

use crate::{EncodeOptions, Error, JsonValue, Result};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};
use std::io;

/// Writes `value` as JSON text using the layout flags of `options`.
pub fn to_writer<W>(writer: W, value: &JsonValue, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
{
    if options.pretty {
        let formatter = ShapeFormatter::new(options.indent);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        value.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

/// Renders `value` as JSON text using the layout flags of `options`.
pub fn to_text(value: &JsonValue, options: &EncodeOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    to_writer(&mut buffer, value, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

#[derive(Debug)]
enum Frame {
    /// `broken` once an element has been placed on its own line
    Array { broken: bool },
    Object { empty: bool },
}

/// A [`Formatter`] that indents objects and nested arrays but keeps arrays of
/// primitives on one line.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use shapejson::json;
/// use shapejson::text::ShapeFormatter;
///
/// let value = json!({"dims": [2, 3], "rows": [[1, 2, 3], [4, 5, 6]]});
/// let mut out = Vec::new();
/// let mut ser = serde_json::Serializer::with_formatter(&mut out, ShapeFormatter::new(2));
/// value.serialize(&mut ser).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "{\n  \"dims\": [2, 3],\n  \"rows\": [\n    [1, 2, 3],\n    [4, 5, 6]\n  ]\n}"
/// );
/// ```
#[derive(Debug)]
pub struct ShapeFormatter {
    indent: usize,
    level: usize,
    frames: Vec<Frame>,
    /// Set between `begin_array_value` and the first token of that element;
    /// holds whether the element is the first of its array.
    element: Option<bool>,
}

impl ShapeFormatter {
    pub fn new(indent: usize) -> Self {
        ShapeFormatter {
            indent,
            level: 0,
            frames: Vec::new(),
            element: None,
        }
    }

    fn newline<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b"\n")?;
        writer.write_all(" ".repeat(self.level * self.indent).as_bytes())
    }

    /// Lays out the start of a value that may be an array element.
    fn start_value<W>(&mut self, writer: &mut W, structural: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let Some(first) = self.element.take() else {
            return Ok(());
        };
        let broken = match self.frames.last_mut() {
            Some(Frame::Array { broken }) => {
                *broken |= structural;
                *broken
            }
            _ => structural,
        };
        if broken {
            self.newline(writer)
        } else if !first {
            writer.write_all(b" ")
        } else {
            Ok(())
        }
    }
}

impl Formatter for ShapeFormatter {
    fn write_null<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_null(writer)
    }

    fn write_bool<W>(&mut self, writer: &mut W, value: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_bool(writer, value)
    }

    fn write_i64<W>(&mut self, writer: &mut W, value: i64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_i64(writer, value)
    }

    fn write_u64<W>(&mut self, writer: &mut W, value: u64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_u64(writer, value)
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_f64(writer, value)
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.write_number_str(writer, value)
    }

    fn begin_string<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, false)?;
        CompactFormatter.begin_string(writer)
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, true)?;
        self.level += 1;
        self.frames.push(Frame::Array { broken: false });
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.level -= 1;
        if let Some(Frame::Array { broken: true }) = self.frames.pop() {
            self.newline(writer)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.element = Some(first);
        if first {
            Ok(())
        } else {
            writer.write_all(b",")
        }
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.start_value(writer, true)?;
        self.level += 1;
        self.frames.push(Frame::Object { empty: true });
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.level -= 1;
        if let Some(Frame::Object { empty: false }) = self.frames.pop() {
            self.newline(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if let Some(Frame::Object { empty }) = self.frames.last_mut() {
            *empty = false;
        }
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pretty(value: &JsonValue, indent: usize) -> String {
        to_text(value, &EncodeOptions::pretty().with_indent(indent)).unwrap()
    }

    #[test]
    fn test_compact() {
        let value = json!({"a": [1, 2], "b": {"c": null}, "d": []});
        assert_eq!(
            to_text(&value, &EncodeOptions::new()).unwrap(),
            r#"{"a":[1,2],"b":{"c":null},"d":[]}"#
        );
    }

    #[test]
    fn test_pretty_keeps_primitive_arrays_inline() {
        let value = json!([[1, 2], [3, 4]]);
        assert_eq!(pretty(&value, 2), "[\n  [1, 2],\n  [3, 4]\n]");
        assert_eq!(pretty(&json!(["a", null, true]), 2), r#"["a", null, true]"#);
    }

    #[test]
    fn test_pretty_object_with_custom_indent() {
        let value = json!([{"foo": false, "bar": "Aladdin"}, {}]);
        assert_eq!(
            pretty(&value, 4),
            "[\n    {\n        \"foo\": false,\n        \"bar\": \"Aladdin\"\n    },\n    {}\n]"
        );
    }

    #[test]
    fn test_pretty_empty_structures() {
        assert_eq!(pretty(&json!([]), 2), "[]");
        assert_eq!(pretty(&json!({}), 2), "{}");
        assert_eq!(pretty(&json!({"x": [], "y": {}}), 2), "{\n  \"x\": [],\n  \"y\": {}\n}");
    }

    #[test]
    fn test_pretty_parses_like_compact() {
        let value = json!({"m": [[1.5, "NA"], ["NaN", 2]], "l": [{"k": [1]}, [true]], "s": "a\"b"});
        let text = pretty(&value, 3);
        let back: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_string_escapes() {
        let value = JsonValue::from("say \"hi\"\n\u{0001}\\");
        assert_eq!(
            to_text(&value, &EncodeOptions::new()).unwrap(),
            r#""say \"hi\"\n\u0001\\""#
        );
    }
}
