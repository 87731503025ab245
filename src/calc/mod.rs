//! The four arithmetic operations.
//!
//! Each operation is independent of the others; [`evaluate`] runs them in
//! the fixed order sum, difference, product, quotient.

use tracing::debug;

use crate::models::{Operands, Quotient, Report};

pub fn sum(ops: &Operands) -> i128 {
    i128::from(ops.a()) + i128::from(ops.b())
}

pub fn difference(ops: &Operands) -> i128 {
    i128::from(ops.a()) - i128::from(ops.b())
}

pub fn product(ops: &Operands) -> i128 {
    i128::from(ops.a()) * i128::from(ops.b())
}

/// Divide `a` by `b` in floating point, unless `b` is zero.
pub fn quotient(ops: &Operands) -> Quotient {
    if ops.b() == 0 {
        return Quotient::DivisionByZero;
    }
    Quotient::Value(ops.a() as f64 / ops.b() as f64)
}

/// Compute every derived value for `ops`.
pub fn evaluate(ops: Operands) -> Report {
    let report = Report {
        operands: ops,
        sum: sum(&ops),
        difference: difference(&ops),
        product: product(&ops),
        quotient: quotient(&ops),
    };
    debug!(a = ops.a(), b = ops.b(), quotient = %report.quotient, "evaluated operands");
    report
}
