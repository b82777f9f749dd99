//! Event models for CSV parsing and typed conversion.

use crate::amount::Amount;
use crate::error::{PipelineError, Result};
use csv::StringRecord;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;

/// Column names accepted on input and emitted on output, in order.
pub const EXPECTED_COLUMNS: [&str; 5] = ["event_id", "user_id", "event_ts", "event_type", "amount"];

/// Raw event row as read from CSV.
///
/// Maps each column of [`EXPECTED_COLUMNS`] to the untouched string found in
/// that field. Empty fields are kept as `""`; fields missing from a short row
/// are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    values: Vec<String>,
}

impl RawRow {
    /// Builds a row from positional values. Values past the last column are dropped.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawRow {
            values: values
                .into_iter()
                .take(EXPECTED_COLUMNS.len())
                .map(Into::into)
                .collect(),
        }
    }

    pub(crate) fn from_record(record: &StringRecord) -> Self {
        Self::new(record.iter())
    }

    /// Returns the raw value for `column`, or `None` if the row has no such field.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = EXPECTED_COLUMNS.iter().position(|c| *c == column)?;
        self.values.get(idx).map(String::as_str)
    }
}

/// A validated, typed user event.
///
/// Only constructed through [`Event::new`] or [`Event::from_raw`], so every
/// instance has passed presence and type checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    event_id: i64,
    user_id: i64,
    event_ts: String,
    event_type: String,
    amount: Amount,
}

impl Event {
    /// Builds an event from already-typed values.
    pub fn new(
        event_id: i64,
        user_id: i64,
        event_ts: impl Into<String>,
        event_type: impl Into<String>,
        amount: impl Into<Amount>,
    ) -> Self {
        Event {
            event_id,
            user_id,
            event_ts: event_ts.into(),
            event_type: event_type.into(),
            amount: amount.into(),
        }
    }

    /// Converts a raw row into a typed event.
    ///
    /// `user_id` is checked for presence before any field is coerced. Empty
    /// `event_id` or `amount` values are reported as coercion failures.
    /// `row` is the 1-indexed line number used in error messages.
    pub fn from_raw(raw: &RawRow, row: usize) -> Result<Self> {
        let user_id = match raw.get("user_id") {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(PipelineError::RequiredFieldMissing {
                    field: "user_id",
                    row,
                })
            }
        };

        let event_id = parse_field::<i64>(raw.get("event_id"), "event_id", "integer", row)?;
        let user_id = parse_field::<i64>(Some(user_id), "user_id", "integer", row)?;
        let amount = parse_field::<Amount>(raw.get("amount"), "amount", "float", row)?;

        Ok(Event {
            event_id,
            user_id,
            event_ts: raw.get("event_ts").unwrap_or_default().to_string(),
            event_type: raw.get("event_type").unwrap_or_default().to_string(),
            amount,
        })
    }

    /// Event identifier; not checked for uniqueness.
    pub fn event_id(&self) -> i64 {
        self.event_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Timestamp exactly as it appeared in the input.
    pub fn event_ts(&self) -> &str {
        &self.event_ts
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Unrounded amount; rounding happens on output.
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

fn parse_field<T: FromStr>(
    value: Option<&str>,
    field: &'static str,
    target: &'static str,
    row: usize,
) -> Result<T> {
    let raw = value.unwrap_or_default();
    strip_digit_separators(raw.trim())
        .parse::<T>()
        .map_err(|_| PipelineError::TypeCoercion {
            field,
            value: raw.to_string(),
            target,
            row,
        })
}

/// Removes `_` separators that sit between two ASCII digits, as in `1_000`.
///
/// Any other underscore leaves the value untouched so that parsing rejects it.
fn strip_digit_separators(value: &str) -> Cow<'_, str> {
    if !value.contains('_') {
        return Cow::Borrowed(value);
    }
    let bytes = value.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if well_placed {
        Cow::Owned(value.replace('_', ""))
    } else {
        Cow::Borrowed(value)
    }
}

/// Converts raw rows into events, preserving order.
///
/// Stops at the first invalid row; no partial list is returned.
pub fn to_events(rows: &[RawRow]) -> Result<Vec<Event>> {
    rows.iter()
        .enumerate()
        .map(|(row_idx, raw)| Event::from_raw(raw, row_idx + 2)) // 1-indexed, accounting for header row
        .collect()
}
