//! Shared types used across all modules.
//!
//! This module defines the operands, the computed report, and the small
//! enums that select output format and malformed-input handling. Other
//! modules import from here rather than reaching into each other's
//! internals.

pub mod report;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use report::{Quotient, Report};

/// The two integers read for a single invocation.
///
/// Fields are private so the values cannot change once read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    a: i64,
    b: i64,
}

impl Operands {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// The first operand (dividend).
    pub fn a(&self) -> i64 {
        self.a
    }

    /// The second operand (divisor).
    pub fn b(&self) -> i64 {
        self.b
    }
}

/// Output renderer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed `Label: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

/// What to do with a token that is not a valid integer, or a missing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Fail with an error and a non-zero exit status.
    #[default]
    Reject,
    /// Substitute zero and carry on.
    Zero,
}

impl fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputPolicy::Reject => write!(f, "reject"),
            InvalidInputPolicy::Zero => write!(f, "zero"),
        }
    }
}

impl std::str::FromStr for InvalidInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(InvalidInputPolicy::Reject),
            "zero" => Ok(InvalidInputPolicy::Zero),
            _ => Err(format!("unknown invalid-input policy: {s}")),
        }
    }
}
