//! Result types produced by [`crate::calc::evaluate`].

use std::fmt;

use super::Operands;
use crate::constants::DIVISION_BY_ZERO_MESSAGE;

/// Outcome of the guarded division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quotient {
    /// `a / b` computed in floating point.
    Value(f64),
    /// The divisor was zero; no division was attempted.
    DivisionByZero,
}

impl Quotient {
    /// Format the quotient with `precision` decimal places.
    ///
    /// Returns `None` for [`Quotient::DivisionByZero`].
    pub fn formatted(&self, precision: usize) -> Option<String> {
        match self {
            Quotient::Value(q) => Some(format!("{q:.precision$}")),
            Quotient::DivisionByZero => None,
        }
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quotient::Value(q) => write!(f, "{q}"),
            Quotient::DivisionByZero => write!(f, "{DIVISION_BY_ZERO_MESSAGE}"),
        }
    }
}

/// The four derived values for one pair of operands.
///
/// Integer results are widened to `i128`, which holds every sum,
/// difference and product of two `i64` values exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub operands: Operands,
    pub sum: i128,
    pub difference: i128,
    pub product: i128,
    pub quotient: Quotient,
}
