//! Output renderers: plain text lines and JSON.

pub mod json;
pub mod text;

use crate::models::{OutputFormat, Report};

/// Trait for rendering a computed report to an output format.
pub trait ReportRenderer {
    /// Render the report to a string, including the trailing newline.
    fn render(&self, report: &Report) -> String;
}

impl OutputFormat {
    /// Render `report` using the renderer for this format.
    pub fn render(&self, report: &Report, precision: usize) -> String {
        match self {
            OutputFormat::Text => text::TextRenderer { precision }.render(report),
            OutputFormat::Json => json::JsonRenderer { precision }.render(report),
        }
    }
}
