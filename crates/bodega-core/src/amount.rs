//! # Amount Module
//!
//! Provides the `Amount` type: an integer cell for values that arrive as
//! text from a form field.
//!
//! ## Why Not Plain i64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE PARSED-INPUT PROBLEM                                               │
//! │                                                                         │
//! │  A numeric <input> hands the application a STRING. Parsing "12" is     │
//! │  easy; parsing "" or "12x" is not a number at all. Coercing a failed   │
//! │  parse back to a stale value silently corrupts the draft, and         │
//! │  panicking takes down the whole editor over a typo.                    │
//! │                                                                         │
//! │  OUR SOLUTION: an absorbing Invalid state                              │
//! │    Amount::parse("12")  = Value(12)                                    │
//! │    Amount::parse("12x") = Invalid                                      │
//! │    Invalid + anything   = Invalid                                      │
//! │                                                                         │
//! │  Derived fields (total, change) display as invalid instead of wrong,  │
//! │  and recover as soon as the offending field is corrected.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! `Value(n)` serializes as the JSON number `n`; `Invalid` serializes as
//! `null`, which is also what `JSON.stringify` does with `NaN`. A `null`
//! or absent-by-null field deserializes back to `Invalid`.
//!
//! ## Usage
//! ```rust
//! use bodega_core::Amount;
//!
//! let payment = Amount::parse("40");
//! let total = Amount::from(36);
//! assert_eq!(payment - total, Amount::from(4));
//!
//! let garbage = Amount::parse("4o");
//! assert_eq!(garbage - total, Amount::Invalid);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary amount or quantity parsed from form-field text.
///
/// ## Design Decisions
/// - **i64 (signed)**: whole currency units, matching the Store API wire
///   format; negative values are representable (the UI hints `min` bounds
///   but does not enforce them)
/// - **Absorbing Invalid**: arithmetic never panics; one bad operand makes
///   the result Invalid
/// - **Saturating math**: overflow clamps instead of panicking in debug
///   builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Amount {
    /// A successfully parsed integer.
    Value(i64),
    /// The result of a failed parse, or of arithmetic over one.
    Invalid,
}

impl Amount {
    /// Zero amount.
    pub const ZERO: Amount = Amount::Value(0);

    /// Parses form-field text into an amount.
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::Amount;
    ///
    /// assert_eq!(Amount::parse(" 12 "), Amount::from(12));
    /// assert_eq!(Amount::parse("-3"), Amount::from(-3));
    /// assert_eq!(Amount::parse("abc"), Amount::Invalid);
    /// assert_eq!(Amount::parse(""), Amount::Invalid);
    /// ```
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Amount::Value)
            .unwrap_or(Amount::Invalid)
    }

    /// Returns the integer value, or `None` when invalid.
    #[inline]
    pub const fn value(self) -> Option<i64> {
        match self {
            Amount::Value(v) => Some(v),
            Amount::Invalid => None,
        }
    }

    /// Checks that this cell holds a real number.
    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, Amount::Value(_))
    }

    /// Checks if the value is zero (an Invalid cell is not zero).
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Amount::Value(0))
    }

    /// Checks that the cell holds a non-negative number.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        matches!(self, Amount::Value(v) if v >= 0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default amount is zero, matching a freshly opened form.
impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl From<i64> for Amount {
    #[inline]
    fn from(v: i64) -> Self {
        Amount::Value(v)
    }
}

/// Wire representation: number or null.
impl From<Option<i64>> for Amount {
    fn from(v: Option<i64>) -> Self {
        match v {
            Some(v) => Amount::Value(v),
            None => Amount::Invalid,
        }
    }
}

impl From<Amount> for Option<i64> {
    fn from(a: Amount) -> Self {
        a.value()
    }
}

/// Display implementation shows the number, or `NaN` for an invalid cell.
///
/// ## Note
/// This is for debugging and logs. The UI shell decides how an invalid
/// derived field is rendered.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(v) => write!(f, "{}", v),
            Amount::Invalid => write!(f, "NaN"),
        }
    }
}

/// Addition; Invalid absorbs.
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Amount::Value(a), Amount::Value(b)) => Amount::Value(a.saturating_add(b)),
            _ => Amount::Invalid,
        }
    }
}

/// Subtraction; Invalid absorbs.
impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Amount::Value(a), Amount::Value(b)) => Amount::Value(a.saturating_sub(b)),
            _ => Amount::Invalid,
        }
    }
}

/// Multiplication; Invalid absorbs. Used for `price * quantity`.
impl Mul for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Amount::Value(a), Amount::Value(b)) => Amount::Value(a.saturating_mul(b)),
            _ => Amount::Invalid,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
