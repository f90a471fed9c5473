//! Coercion of source-only vector kinds to encodable kinds.
//!
//! The encoder only knows six element kinds. Everything else is rewritten here,
//! in one place, before any per-element rule runs:
//!
//! | Source kind | Option | Canonical kind |
//! |---|---|---|
//! | factor | `FactorFormat::String` | text (level labels) |
//! | factor | `FactorFormat::Integer` | integer (1-based codes) |
//! | date | `DateFormat::Iso8601` | text `YYYY-MM-DD` |
//! | date | `DateFormat::Epoch` | real (days since 1970-01-01) |
//! | date-time | `DateTimeFormat::String` | text `YYYY-MM-DD HH:MM:SS` |
//! | date-time | `DateTimeFormat::Iso8601` | text `YYYY-MM-DDTHH:MM:SSZ` |
//! | date-time | `DateTimeFormat::Epoch` | real (milliseconds since the epoch) |
//! | big integer | `bigint_as_char` | text (decimal digits) |
//!
//! Logical, integer, real, complex, text and big integer vectors pass through.

use crate::{
    DateFormat, DateTimeFormat, Double, EncodeOptions, FactorFormat, Vector, VectorKind,
};
use chrono::Datelike;
use std::borrow::Cow;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// The kind a vector of `kind` has after normalization under `options`.
///
/// # Examples
///
/// ```rust
/// use shapejson::normalize::canonical_kind;
/// use shapejson::{DateFormat, EncodeOptions, VectorKind};
///
/// let options = EncodeOptions::new();
/// assert_eq!(canonical_kind(VectorKind::Date, &options), VectorKind::Text);
///
/// let options = options.with_date(DateFormat::Epoch);
/// assert_eq!(canonical_kind(VectorKind::Date, &options), VectorKind::Double);
/// ```
#[must_use]
pub fn canonical_kind(kind: VectorKind, options: &EncodeOptions) -> VectorKind {
    match kind {
        VectorKind::Factor => match options.factor {
            FactorFormat::String => VectorKind::Text,
            FactorFormat::Integer => VectorKind::Integer,
        },
        VectorKind::Date => match options.date {
            DateFormat::Iso8601 => VectorKind::Text,
            DateFormat::Epoch => VectorKind::Double,
        },
        VectorKind::DateTime => match options.datetime {
            DateTimeFormat::String | DateTimeFormat::Iso8601 => VectorKind::Text,
            DateTimeFormat::Epoch => VectorKind::Double,
        },
        VectorKind::BigInt if options.bigint_as_char => VectorKind::Text,
        other => other,
    }
}

/// Rewrites `vector` into its canonical kind, borrowing when nothing changes.
///
/// Missing elements stay missing.
#[must_use]
pub fn normalize<'v>(vector: &'v Vector, options: &EncodeOptions) -> Cow<'v, Vector> {
    match vector {
        Vector::Factor(factor) => Cow::Owned(match options.factor {
            FactorFormat::String => Vector::Text(
                (0..factor.codes().len())
                    .map(|i| factor.label(i).map(str::to_string))
                    .collect(),
            ),
            FactorFormat::Integer => Vector::Integer(
                factor
                    .codes()
                    .iter()
                    .map(|c| c.and_then(|c| i32::try_from(c + 1).ok()))
                    .collect(),
            ),
        }),
        Vector::Date(dates) => Cow::Owned(match options.date {
            DateFormat::Iso8601 => Vector::Text(
                dates
                    .iter()
                    .map(|d| d.map(|d| d.format("%Y-%m-%d").to_string()))
                    .collect(),
            ),
            DateFormat::Epoch => Vector::Double(
                dates
                    .iter()
                    .map(|d| {
                        d.map_or(Double::NA, |d| {
                            Double::Finite(f64::from(d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE))
                        })
                    })
                    .collect(),
            ),
        }),
        Vector::DateTime(times) => Cow::Owned(match options.datetime {
            DateTimeFormat::String => Vector::Text(
                times
                    .iter()
                    .map(|t| t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()))
                    .collect(),
            ),
            DateTimeFormat::Iso8601 => Vector::Text(
                times
                    .iter()
                    .map(|t| t.map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string()))
                    .collect(),
            ),
            DateTimeFormat::Epoch => Vector::Double(
                times
                    .iter()
                    .map(|t| t.map_or(Double::NA, |t| Double::Finite(t.timestamp_millis() as f64)))
                    .collect(),
            ),
        }),
        Vector::BigInt(values) if options.bigint_as_char => Cow::Owned(Vector::Text(
            values
                .iter()
                .map(|b| b.as_ref().map(ToString::to_string))
                .collect(),
        )),
        _ => Cow::Borrowed(vector),
    }
}
