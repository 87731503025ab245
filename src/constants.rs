//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the fixed user-facing strings so a rename only requires changing
//! this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "cal";

/// Crate version, as reported by `cal version` and `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (looked up in the working directory).
pub const CONFIG_FILENAME: &str = ".cal.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "cal";

/// Prompt written to stdout before reading operands from stdin.
pub const PROMPT: &str = "Enter two numbers: ";

/// Printed in place of the quotient line when the divisor is zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is not allowed.";

/// Decimal places used for the quotient unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted precision; beyond this `f64` carries no more digits.
pub const MAX_PRECISION: usize = 17;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CAL_FORMAT";
pub const ENV_PRECISION: &str = "CAL_PRECISION";
pub const ENV_ON_INVALID: &str = "CAL_ON_INVALID";
pub const ENV_LOG: &str = "CAL_LOG";
