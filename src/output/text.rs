//! Plain-text renderer: one `Label: value` line per operation.

use crate::constants::DIVISION_BY_ZERO_MESSAGE;
use crate::models::{Quotient, Report};
use crate::output::ReportRenderer;

/// Text output renderer. Lines are never styled so output can be piped.
pub struct TextRenderer {
    /// Decimal places of the quotient.
    pub precision: usize,
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!("Sum: {}\n", report.sum));
        output.push_str(&format!("Difference: {}\n", report.difference));
        output.push_str(&format!("Product: {}\n", report.product));

        match report.quotient {
            Quotient::Value(q) => {
                let precision = self.precision;
                output.push_str(&format!("Division: {q:.precision$}\n"));
            }
            Quotient::DivisionByZero => {
                output.push_str(DIVISION_BY_ZERO_MESSAGE);
                output.push('\n');
            }
        }

        output
    }
}
