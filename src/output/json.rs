//! JSON output renderer.
//!
//! Outputs `{"a", "b", "sum", "difference", "product", "division"}` where
//! `division` holds either the rounded quotient or the zero-division error.

use crate::constants::DIVISION_BY_ZERO_MESSAGE;
use crate::models::Report;
use crate::output::ReportRenderer;

/// JSON output renderer.
pub struct JsonRenderer {
    /// Decimal places of the quotient.
    pub precision: usize,
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        let division = match report.quotient.formatted(self.precision) {
            Some(formatted) => serde_json::json!({
                "quotient": formatted.parse::<f64>().ok(),
                "formatted": formatted,
            }),
            None => serde_json::json!({ "error": DIVISION_BY_ZERO_MESSAGE }),
        };

        // serde_json::Value has no i128 variant; results outside the i64
        // range are emitted as strings.
        let output = serde_json::json!({
            "a": report.operands.a(),
            "b": report.operands.b(),
            "sum": integer(report.sum),
            "difference": integer(report.difference),
            "product": integer(report.product),
            "division": division,
        });

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}

fn integer(value: i128) -> serde_json::Value {
    match i64::try_from(value) {
        Ok(v) => serde_json::Value::from(v),
        Err(_) => serde_json::Value::from(value.to_string()),
    }
}
