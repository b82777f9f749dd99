//! Monetary amount rendered with two decimal places.
//!
//! Amounts are carried as `f64` and only normalized when written out, so
//! re-reading a written file yields the rounded value.

use serde::{Serialize, Serializer};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A floating-point amount that displays with exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use event_normalizer::Amount;
///
/// let amount = Amount::from_str("12.5").unwrap();
/// assert_eq!(amount.to_string(), "12.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// The number of decimal places used when rendering.
    pub const SCALE: usize = 2;

    /// Creates a new `Amount` from a raw value.
    pub fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // non-finite values are spelled in lowercase
        if self.0.is_nan() {
            f.write_str("nan")
        } else if self.0.is_infinite() {
            f.write_str(if self.0 > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{:.*}", Self::SCALE, self.0)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
